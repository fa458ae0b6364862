/// Binary operator evaluation.
///
/// Applies arithmetic, comparison and logical operators to two numbers and
/// raises the division-by-zero error.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements the prefix `+`, `-` and `ulta` operators.
pub mod unary;

/// Core evaluation logic.
///
/// Defines the [`core::Interpreter`], which owns the active context and
/// symbol table and dispatches on each AST node variant.
pub mod core;

/// Evaluation frames.
///
/// Defines [`context::Context`], the named frame chain runtime errors walk
/// to build their traceback.
pub mod context;

/// Variable storage.
///
/// Defines [`scope::SymbolTable`], a chain of scopes mapping names to
/// numbers.
pub mod scope;

/// Variable reads and assignments.
pub mod variable;

/// Conditional expression evaluation.
pub mod conditional;
