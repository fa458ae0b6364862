use std::rc::Rc;

use tracing::trace;

use crate::{
    ast::Node,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        evaluator::{context::Context, scope::SymbolTable},
        value::number::Number,
    },
    util::position::{Position, Span},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates syntax trees.
///
/// An `Interpreter` owns the active [`Context`] frame and the
/// [`SymbolTable`] variables live in. Bindings persist for as long as the
/// interpreter does, so feeding several programs to one interpreter behaves
/// like a REPL session, while separate interpreters never see each other's
/// variables.
#[derive(Debug, Clone)]
pub struct Interpreter {
    context: Rc<Context>,
    symbols: SymbolTable,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with a fresh `<MAIN>` frame and no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::with_context(Rc::new(Context::main()), SymbolTable::new())
    }

    /// Creates an interpreter that starts in `context` with `symbols`.
    ///
    /// Useful for sharing a prepared set of bindings between runs: clone the
    /// table and hand each run its own copy.
    #[must_use]
    pub const fn with_context(context: Rc<Context>, symbols: SymbolTable) -> Self {
        Self { context, symbols }
    }

    /// The innermost active frame.
    #[must_use]
    pub const fn context(&self) -> &Rc<Context> {
        &self.context
    }

    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub const fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    /// Enters a nested frame named `name`, opened at `entry`.
    ///
    /// The frame gets its own scope: variables assigned inside it shadow
    /// outer ones and are dropped by [`Interpreter::leave_frame`].
    pub fn enter_frame(&mut self, name: impl Into<String>, entry: Position) {
        self.context = self.context.child(name, entry);
        self.symbols.push_scope();
    }

    /// Leaves the innermost frame and its scope.
    ///
    /// Returns `false`, changing nothing, when already in the root frame.
    pub fn leave_frame(&mut self) -> bool {
        let Some(parent) = self.context.parent().map(Rc::clone) else {
            return false;
        };
        self.context = parent;
        self.symbols.pop_scope();
        true
    }

    /// Evaluates `node` in the active frame.
    ///
    /// Returns `Ok(None)` for a conditional whose conditions are all false
    /// and which has no `else` arm; every other node yields a number.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised anywhere in the tree. Operands
    /// are evaluated left to right, and nothing to the right of a failure is
    /// evaluated.
    ///
    /// # Example
    /// ```
    /// use soch::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::tokenize,
    ///     parser::core::Parser,
    ///     value::numeric::Numeric,
    /// };
    ///
    /// let tokens = tokenize("2 ^ 3 ^ 2").unwrap();
    /// let ast = Parser::new(&tokens).parse().unwrap();
    ///
    /// let value = Interpreter::new().visit(&ast).unwrap().unwrap();
    /// assert_eq!(value.value, Numeric::Int(512));
    /// ```
    pub fn visit(&mut self, node: &Node) -> EvalResult<Option<Number>> {
        match node {
            Node::Number { value, span } => Ok(Some(Number::new(*value, *span))),
            Node::UnaryOp { op, operand, span } => {
                self.visit_unary_op(*op, operand, *span).map(Some)
            },
            Node::BinaryOp { left,
                             op,
                             right,
                             span, } => self.visit_binary_op(left, *op, right, *span).map(Some),
            Node::VarAccess { name, span } => self.visit_var_access(name, *span).map(Some),
            Node::VarAssign { name, value, .. } => self.visit_var_assign(name, value).map(Some),
            Node::Conditions { cases, else_case, .. } => {
                self.visit_conditions(cases, else_case.as_deref())
            },
        }
    }

    /// Evaluates `node` where a number is required.
    ///
    /// A node that yields no value raises
    /// [`RuntimeErrorKind::MissingValue`] spanning that node.
    pub(crate) fn visit_value(&mut self, node: &Node) -> EvalResult<Number> {
        let value = self.visit(node)?;
        trace!(span = %node.span(), "evaluated operand");
        value.ok_or_else(|| self.error(RuntimeErrorKind::MissingValue, node.span()))
    }

    /// Builds a runtime error attributed to the active frame.
    pub(crate) fn error(&self, kind: RuntimeErrorKind, span: Span) -> RuntimeError {
        RuntimeError::new(kind, span, Rc::clone(&self.context))
    }
}
