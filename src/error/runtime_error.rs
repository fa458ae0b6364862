use std::rc::Rc;

use thiserror::Error;

use crate::{
    error::pointer::point_error,
    interpreter::evaluator::context::Context,
    util::position::{Source, Span},
};

/// What went wrong during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeErrorKind {
    /// The right-hand side of `/` evaluated to zero.
    #[error("Division by zero not defined")]
    DivisionByZero,
    /// A variable was read before any value was bound to it.
    #[error("{name} is not defined!")]
    UndefinedVariable {
        /// Name of the variable.
        name: String,
    },
    /// An expression that yields no value (an `if` with no taken branch) was
    /// used where a number is required.
    #[error("Expression produced no value")]
    MissingValue,
}

/// An error raised while evaluating a syntax tree.
///
/// Besides the span of the failing expression it keeps the [`Context`] that
/// was active, so the report can show the chain of frames that led to it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Runtime Error: {kind}")]
pub struct RuntimeError {
    /// What went wrong.
    pub kind:    RuntimeErrorKind,
    /// Span of the expression the error is attributed to.
    pub span:    Span,
    /// The innermost frame active when the error was raised.
    pub context: Rc<Context>,
}

impl RuntimeError {
    pub const fn new(kind: RuntimeErrorKind, span: Span, context: Rc<Context>) -> Self {
        Self { kind,
               span,
               context }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        "Runtime Error"
    }

    /// Builds the `Traceback:` block, outermost frame first.
    ///
    /// The innermost frame reports the line of the error itself; every outer
    /// frame reports the line at which its child frame was entered.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use soch::{
    ///     error::{RuntimeError, RuntimeErrorKind},
    ///     interpreter::evaluator::context::Context,
    ///     util::position::{Source, Span},
    /// };
    ///
    /// let source = Source::new("demo", "x");
    /// let error = RuntimeError::new(RuntimeErrorKind::DivisionByZero,
    ///                               Span::default(),
    ///                               Rc::new(Context::main()));
    ///
    /// assert_eq!(error.traceback(&source),
    ///            "Traceback:\n\tError in file demo, line 1 of <MAIN>,\n");
    /// ```
    #[must_use]
    pub fn traceback(&self, source: &Source) -> String {
        let mut frames = Vec::new();
        let mut position = self.span.start;
        let mut context = Some(self.context.as_ref());

        while let Some(frame) = context {
            frames.push(format!("\tError in file {}, line {} of {},\n",
                                source.name(),
                                position.line + 1,
                                frame.name()));
            if let Some(entry) = frame.parent_entry() {
                position = entry;
            }
            context = frame.parent().map(Rc::as_ref);
        }

        frames.reverse();
        format!("Traceback:\n{}", frames.concat())
    }

    /// Renders the full report: traceback, source pointer, and
    /// `Runtime Error: details`.
    #[must_use]
    pub fn render(&self, source: &Source) -> String {
        format!("{}\n{}\n{}: {}",
                self.traceback(source),
                point_error(source, self.span),
                self.name(),
                self.kind)
    }
}
