use crate::{
    ast::{Node, UnaryOperator},
    interpreter::{
        lexer::{Keyword, TokenKind},
        parser::core::{ParseResult, Parser},
        value::numeric::Numeric,
    },
};

impl Parser<'_> {
    /// Parses a signed factor.
    ///
    /// Signs are right-associative, so `--x` parses as `-(-x)`. A sign binds
    /// looser than `^`: `-2 ^ 2` is `-(2 ^ 2)`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | power
    /// ```
    pub(crate) fn factor(&mut self) -> ParseResult<Node> {
        let op = match self.current().kind {
            TokenKind::Plus => UnaryOperator::Plus,
            TokenKind::Minus => UnaryOperator::Negate,
            _ => return self.power(),
        };

        let start = self.advance().span;
        let operand = self.factor()?;
        let span = start.to(operand.span());
        Ok(Node::UnaryOp { op,
                           operand: Box::new(operand),
                           span })
    }

    /// Parses an atom: the operands every other rule is built from.
    ///
    /// Grammar:
    /// ```text
    ///     atom := INT | FLOAT | IDENTIFIER
    ///           | "(" expr ")"
    ///           | if_expr
    /// ```
    ///
    /// A parenthesized expression yields the inner node unchanged; the
    /// parentheses leave no trace in the tree.
    pub(crate) fn atom(&mut self) -> ParseResult<Node> {
        let token = self.current();

        match &token.kind {
            TokenKind::Int(n) => {
                self.advance();
                Ok(Node::Number { value: Numeric::Int(*n),
                                  span:  token.span, })
            },
            TokenKind::Float(x) => {
                self.advance();
                Ok(Node::Number { value: Numeric::Float(*x),
                                  span:  token.span, })
            },
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Node::VarAccess { name: name.clone(),
                                     span: token.span, })
            },
            TokenKind::LParen => {
                self.advance();
                let inner = self.expr()?;
                if self.current().kind != TokenKind::RParen {
                    return Err(self.error_here("Expected ')'"));
                }
                self.advance();
                Ok(inner)
            },
            TokenKind::Keyword(Keyword::If) => self.if_expr(),
            _ => Err(self.error_here("Expected a number, identifier, '+', '-', '(' or 'if'")),
        }
    }
}
