use crate::{
    ast::{ConditionalCase, Node},
    interpreter::{
        lexer::Keyword,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a conditional expression.
    ///
    /// Syntax:
    /// ```text
    ///     if <expr> then <expr>
    ///     (elif <expr> then <expr>)*
    ///     (else <expr>)?
    /// ```
    /// All arms are collected into one [`Node::Conditions`], in source order.
    ///
    /// # Errors
    /// - A missing `then` after an `if` or `elif` condition.
    /// - Any error from the condition or result expressions.
    pub(crate) fn if_expr(&mut self) -> ParseResult<Node> {
        if !self.current().is_keyword(Keyword::If) {
            return Err(self.error_here("Expected 'if'"));
        }
        let start = self.advance().span;

        let mut cases = vec![self.conditional_case("Expected 'then' after 'if' condition")?];

        while self.current().is_keyword(Keyword::Elif) {
            self.advance();
            cases.push(self.conditional_case("Expected 'then' after 'elif' condition")?);
        }

        let else_case = if self.current().is_keyword(Keyword::Else) {
            self.advance();
            Some(Box::new(self.expr()?))
        } else {
            None
        };

        let end = else_case.as_deref()
                           .or_else(|| cases.last().map(|case| &case.result))
                           .map_or(start, Node::span);

        Ok(Node::Conditions { cases,
                              else_case,
                              span: start.to(end) })
    }

    /// Parses `<expr> then <expr>`, the part shared by `if` and `elif` arms.
    fn conditional_case(&mut self, missing_then: &str) -> ParseResult<ConditionalCase> {
        let condition = self.expr()?;

        if !self.current().is_keyword(Keyword::Then) {
            return Err(self.error_here(missing_then));
        }
        self.advance();

        let result = self.expr()?;
        Ok(ConditionalCase { condition, result })
    }
}
