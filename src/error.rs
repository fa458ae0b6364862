use thiserror::Error;

use crate::util::position::{Source, Span};

/// Lexical errors.
///
/// Raised while splitting source text into tokens: characters that cannot
/// start a token and operators missing their required second character.
pub mod lex_error;
/// Source pointers.
///
/// Renders the lines covered by a span with `^` markers beneath the exact
/// columns, shared by every error report.
pub mod pointer;
/// Runtime errors.
///
/// Raised while evaluating a syntax tree: division by zero, reads of unbound
/// variables, and expressions that produced no value where one was needed.
/// Runtime errors carry the active context so their report includes a
/// traceback.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised by the parser when the token sequence does not match the grammar.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::{RuntimeError, RuntimeErrorKind};
pub use syntax_error::SyntaxError;

/// Any error the pipeline can produce.
///
/// Each stage returns its own error type; this enum lets the driver chain the
/// stages with `?` and hand a single error back to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The human-readable error name, e.g. `Invalid Syntax`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lex(e) => e.name(),
            Self::Syntax(e) => e.name(),
            Self::Runtime(e) => e.name(),
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex(e) => e.span(),
            Self::Syntax(e) => e.span,
            Self::Runtime(e) => e.span,
        }
    }

    /// Renders the full, span-highlighted report for `source`.
    ///
    /// `source` must be the text the error was produced from.
    ///
    /// # Example
    /// ```
    /// use soch::{
    ///     interpreter::evaluator::core::Interpreter,
    ///     run,
    ///     util::position::Source,
    /// };
    ///
    /// let source = Source::new("demo", "1 @ 2");
    /// let error = run(&source, &mut Interpreter::new()).unwrap_err();
    ///
    /// assert_eq!(error.render(&source),
    ///            "Error in file demo, line 1\n\n1 @ 2\n  ^\n\nInvalid Character: '@'");
    /// ```
    #[must_use]
    pub fn render(&self, source: &Source) -> String {
        match self {
            Self::Lex(e) => e.render(source),
            Self::Syntax(e) => e.render(source),
            Self::Runtime(e) => e.render(source),
        }
    }
}
