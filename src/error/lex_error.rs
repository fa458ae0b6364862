use thiserror::Error;

use crate::{
    error::pointer::render_located,
    util::position::{Source, Span},
};

/// Errors raised while turning source text into tokens.
///
/// Lexing stops at the first error; no tokens are produced for a text that
/// fails to lex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Invalid Character: {details}")]
    InvalidCharacter {
        /// The offending character, quoted.
        details: String,
        /// Span of the offending character.
        span:    Span,
    },
    /// A character that must be followed by a specific other character was
    /// not, e.g. a lone `!`.
    #[error("Expected Character: {details}")]
    ExpectedCharacter {
        /// What was expected.
        details: String,
        /// Span from the incomplete token to the character that broke it.
        span:    Span,
    },
}

impl LexError {
    /// The human-readable error name used in reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidCharacter { .. } => "Invalid Character",
            Self::ExpectedCharacter { .. } => "Expected Character",
        }
    }

    #[must_use]
    pub fn details(&self) -> &str {
        match self {
            Self::InvalidCharacter { details, .. } | Self::ExpectedCharacter { details, .. } => {
                details
            },
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::InvalidCharacter { span, .. } | Self::ExpectedCharacter { span, .. } => *span,
        }
    }

    /// Renders the full report: file and line header, source pointer, and
    /// `Name: details`.
    #[must_use]
    pub fn render(&self, source: &Source) -> String {
        render_located(source, self.span(), self.name(), self.details())
    }
}
