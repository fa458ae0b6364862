use tracing::trace;

use crate::{
    ast::Node,
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::number::Number,
    },
    util::position::Span,
};

impl Interpreter {
    /// Reads the variable `name`.
    ///
    /// The stored number is copied and re-anchored at `span`, the access
    /// site, so error pointers and later reads never depend on where the
    /// value was first computed.
    ///
    /// # Errors
    /// [`RuntimeErrorKind::UndefinedVariable`] if no scope binds `name`.
    pub(crate) fn visit_var_access(&self, name: &str, span: Span) -> EvalResult<Number> {
        self.symbols()
            .get(name)
            .map(|stored| stored.with_span(span))
            .ok_or_else(|| {
                self.error(RuntimeErrorKind::UndefinedVariable { name: name.to_owned() },
                           span)
            })
    }

    /// Evaluates `value` and binds the result to `name` in the innermost
    /// scope, overwriting any binding of that name there.
    ///
    /// Yields the bound number.
    pub(crate) fn visit_var_assign(&mut self, name: &str, value: &Node) -> EvalResult<Number> {
        let value = self.visit_value(value)?;
        trace!(name, %value, "bind");
        self.symbols_mut().set(name, value);
        Ok(value)
    }
}
