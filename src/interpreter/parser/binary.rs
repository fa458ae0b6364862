use crate::{
    ast::{BinaryOperator, Node, UnaryOperator},
    interpreter::{
        lexer::{Keyword, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// A grammar rule: parses one operand level.
pub(crate) type Rule<'t> = fn(&mut Parser<'t>) -> ParseResult<Node>;

impl<'t> Parser<'t> {
    /// Parses a chain of binary operators.
    ///
    /// Parses a left operand with `left`, then, while the current token maps
    /// to an operator accepted by `accepts`, consumes it, parses a right
    /// operand with `right` and folds both into a left-nested
    /// [`Node::BinaryOp`].
    ///
    /// Passing the same rule for both sides gives a left-associative chain.
    /// Passing a rule that recurses back into this level for `right` makes
    /// the chain right-associative, which is how `^` is built.
    pub(crate) fn binary_operation(&mut self,
                                   left: Rule<'t>,
                                   accepts: fn(BinaryOperator) -> bool,
                                   right: Rule<'t>)
                                   -> ParseResult<Node> {
        let mut node = left(self)?;

        while let Some(op) = token_to_binary_operator(&self.current().kind)
              && accepts(op)
        {
            self.advance();
            let rhs = right(self)?;
            let span = node.span().to(rhs.span());
            node = Node::BinaryOp { left: Box::new(node),
                                    op,
                                    right: Box::new(rhs),
                                    span };
        }

        Ok(node)
    }

    /// Parses a comparison, or a logical negation of one.
    ///
    /// Grammar:
    /// ```text
    ///     comp := "ulta" comp
    ///           | arith (("=" | "!=" | "<" | "<=" | ">" | ">=") arith)*
    /// ```
    pub(crate) fn comp(&mut self) -> ParseResult<Node> {
        if self.current().is_keyword(Keyword::Not) {
            let start = self.advance().span;
            let operand = self.comp()?;
            let span = start.to(operand.span());
            return Ok(Node::UnaryOp { op: UnaryOperator::Not,
                                      operand: Box::new(operand),
                                      span });
        }

        self.binary_operation(Self::arith, is_comparison, Self::arith)
    }

    /// Parses addition and subtraction.
    ///
    /// Grammar: `arith := term (("+" | "-") term)*`
    pub(crate) fn arith(&mut self) -> ParseResult<Node> {
        self.binary_operation(Self::term,
                              |op| matches!(op, BinaryOperator::Add | BinaryOperator::Subtract),
                              Self::term)
    }

    /// Parses multiplication and division.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    pub(crate) fn term(&mut self) -> ParseResult<Node> {
        self.binary_operation(Self::factor,
                              |op| matches!(op, BinaryOperator::Multiply | BinaryOperator::Divide),
                              Self::factor)
    }

    /// Parses exponentiation.
    ///
    /// The right operand is a full `factor`, which loops back into `power`,
    /// so `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)` and `2 ^ -1` is accepted.
    ///
    /// Grammar: `power := atom ("^" factor)*`
    pub(crate) fn power(&mut self) -> ParseResult<Node> {
        self.binary_operation(Self::atom, |op| op == BinaryOperator::Power, Self::factor)
    }
}

/// Returns `true` for the six comparison operators.
#[must_use]
pub const fn is_comparison(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::Less
             | BinaryOperator::LessEqual
             | BinaryOperator::Greater
             | BinaryOperator::GreaterEqual)
}

/// Maps a token to the binary operator it spells, if any.
///
/// # Example
/// ```
/// use soch::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Keyword, TokenKind},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Power),
///            Some(BinaryOperator::Power));
/// assert_eq!(token_to_binary_operator(&TokenKind::Keyword(Keyword::Or)),
///            Some(BinaryOperator::Or));
/// assert_eq!(token_to_binary_operator(&TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Subtract),
        TokenKind::Multiply => Some(BinaryOperator::Multiply),
        TokenKind::Divide => Some(BinaryOperator::Divide),
        TokenKind::Power => Some(BinaryOperator::Power),
        TokenKind::Equal => Some(BinaryOperator::Equal),
        TokenKind::NotEqual => Some(BinaryOperator::NotEqual),
        TokenKind::LessThan => Some(BinaryOperator::Less),
        TokenKind::LessThanEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterThan => Some(BinaryOperator::Greater),
        TokenKind::GreaterThanEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Keyword(Keyword::And) => Some(BinaryOperator::And),
        TokenKind::Keyword(Keyword::Or) => Some(BinaryOperator::Or),
        _ => None,
    }
}
