use tracing::debug;

use crate::{
    ast::{BinaryOperator, Node},
    error::SyntaxError,
    interpreter::lexer::{Keyword, Token, TokenKind},
    util::position::{Position, Span},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Fallback end-of-input token for token slices that lack one.
static EOF: Token = Token::new(TokenKind::Eof,
                               Span::empty(Position::new(0, 0, 0)));

/// A recursive-descent parser over a token sequence.
///
/// The parser looks at one token at a time and never backtracks: once a
/// rule has consumed a token it either completes or fails. The first error
/// anywhere aborts the whole parse.
pub struct Parser<'t> {
    tokens: &'t [Token],
    index:  usize,
}

impl<'t> Parser<'t> {
    /// Creates a parser positioned at the first token.
    ///
    /// `tokens` is expected to end with a [`TokenKind::Eof`] token, as
    /// produced by [`crate::interpreter::lexer::tokenize`].
    #[must_use]
    pub const fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Parses the whole token sequence as a single expression.
    ///
    /// Grammar: `program := expr EOF`
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] if the tokens do not form an expression, or
    /// if tokens remain after a complete expression.
    ///
    /// # Example
    /// ```
    /// use soch::{
    ///     ast::{BinaryOperator, Node},
    ///     interpreter::{lexer::tokenize, parser::core::Parser},
    /// };
    ///
    /// let tokens = tokenize("1 + 2 * 3").unwrap();
    /// let ast = Parser::new(&tokens).parse().unwrap();
    ///
    /// let Node::BinaryOp { op, .. } = ast else { panic!("expected a binary op") };
    /// assert_eq!(op, BinaryOperator::Add);
    /// ```
    pub fn parse(&mut self) -> ParseResult<Node> {
        let ast = self.expr()?;

        if self.current().kind != TokenKind::Eof {
            debug!(token = %self.current().kind, "trailing tokens after expression");
            return Err(self.error_here("Expected '+', '-', '*', '/', '^', comparison, 'aur' or 'ya'"));
        }

        Ok(ast)
    }

    /// Parses an expression.
    ///
    /// Grammar:
    /// ```text
    ///     expr := "soch" IDENTIFIER expr "hai"
    ///           | comp (("aur" | "ya") comp)*
    /// ```
    ///
    /// When the operator chain fails before consuming a single token, the
    /// error is replaced by a message listing everything an expression may
    /// start with. Failures after some progress keep their own, more specific
    /// message.
    pub fn expr(&mut self) -> ParseResult<Node> {
        if self.current().is_keyword(Keyword::AssignStart) {
            return self.assignment();
        }

        let start = self.index;
        let result = self.binary_operation(Self::comp,
                                           |op| matches!(op, BinaryOperator::And | BinaryOperator::Or),
                                           Self::comp);

        result.map_err(|err| {
                  if self.index == start {
                      self.error_here("Expected 'soch', 'if', 'ulta', number, identifier, '+', '-' or '('")
                  } else {
                      err
                  }
              })
    }

    /// Parses `soch <identifier> <expr> hai`.
    fn assignment(&mut self) -> ParseResult<Node> {
        let start = self.advance().span;

        let TokenKind::Identifier(name) = &self.current().kind else {
            return Err(self.error_here("Expected identifier after 'soch'"));
        };
        let name = name.clone();
        self.advance();

        let value = self.expr()?;

        if !self.current().is_keyword(Keyword::AssignEnd) {
            return Err(self.error_here("Expected assignment to end with 'hai'"));
        }
        let end = self.advance().span;

        Ok(Node::VarAssign { name,
                             value: Box::new(value),
                             span: start.to(end) })
    }

    /// The token under the cursor.
    ///
    /// Past the end of the sequence this keeps returning the last token,
    /// which is the end-of-input marker.
    pub(crate) fn current(&self) -> &'t Token {
        self.tokens
            .get(self.index)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF)
    }

    /// Consumes the current token and returns it.
    pub(crate) fn advance(&mut self) -> &'t Token {
        let token = self.current();
        if self.index < self.tokens.len() {
            self.index += 1;
        }
        token
    }

    /// Builds a syntax error pointing at the current token.
    pub(crate) fn error_here(&self, details: &str) -> SyntaxError {
        SyntaxError::new(details, self.current().span)
    }
}
