/// The evaluator module walks syntax trees and computes results.
///
/// The evaluator dispatches on each node variant, performs arithmetic,
/// comparison and logical operations, manages variable bindings, and raises
/// runtime errors attributed to the active evaluation frame.
///
/// # Responsibilities
/// - Evaluates every AST node variant.
/// - Stores and looks up variables in a chain of scopes.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat sequence of
/// tokens: numbers, identifiers, keywords and operators, each with its source
/// span. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens with line and column
///   positions.
/// - Separates reserved keywords from identifiers.
/// - Reports lexical errors for invalid or incomplete input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence with one token of lookahead and
/// builds a tree that encodes operator precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting errors at the offending token.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the integer-or-float numeric payload and its operations.
/// - Pairs payloads with source spans for error attribution.
pub mod value;
