use thiserror::Error;

use crate::{
    error::pointer::render_located,
    util::position::{Source, Span},
};

/// A token sequence that does not match the grammar.
///
/// `details` names what the parser expected; `span` is the span of the token
/// it found instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid Syntax: {details}")]
pub struct SyntaxError {
    /// What the parser expected at this point.
    pub details: String,
    /// Span of the token that did not fit.
    pub span:    Span,
}

impl SyntaxError {
    pub fn new(details: impl Into<String>, span: Span) -> Self {
        Self { details: details.into(),
               span }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        "Invalid Syntax"
    }

    /// Renders the full report: file and line header, source pointer, and
    /// `Invalid Syntax: details`.
    #[must_use]
    pub fn render(&self, source: &Source) -> String {
        render_located(source, self.span, self.name(), &self.details)
    }
}
