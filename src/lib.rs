//! # soch
//!
//! soch is a small expression language with Hindi keywords, written in Rust.
//! Source text is split into tokens, parsed into an abstract syntax tree by a
//! recursive-descent parser, and evaluated directly by walking that tree.
//!
//! ```text
//! soch x 5 hai                      # bind x to 5
//! if x > 3 aur x < 10 then 1 else 0 # conditionals, comparisons, logic
//! 2 ^ 3 ^ 2                         # 512: `^` is right-associative
//! ```
//!
//! Every failure is reported with the file name, line and a pointer to the
//! offending characters.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use tracing::{debug, instrument};

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Interpreter, lexer::tokenize, parser::core::Parser,
        value::number::Number,
    },
    util::position::Source,
};

/// Defines the structure of parsed code.
///
/// This module declares the [`ast::Node`] enum and the operator types that
/// represent the syntactic structure of an expression as a tree. The tree is
/// built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one node variant per language construct.
/// - Attaches a source span to every node for error reporting.
pub mod ast;
/// Provides the error types for every stage of the pipeline.
///
/// This module defines the lexical, syntax and runtime errors, the
/// [`error::Error`] enum that unifies them, and the renderer that turns any
/// of them into a human-readable report with a source pointer.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Renders reports with file name, line number and `^` markers.
/// - Renders a traceback of evaluation frames for runtime errors.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator and value
/// representations.
///
/// # Responsibilities
/// - Converts source text into tokens.
/// - Builds syntax trees from tokens.
/// - Evaluates syntax trees to numbers.
pub mod interpreter;
/// General utilities: numeric conversion helpers and source positions.
pub mod util;

/// Runs one program: lexes, parses and evaluates `source` with
/// `interpreter`.
///
/// Each stage runs only if the previous one succeeded. Bindings made by the
/// program stay in `interpreter`, so calling `run` repeatedly with the same
/// interpreter behaves like a REPL session.
///
/// Returns `Ok(None)` when the program is a conditional that took no branch.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error. Render it with
/// [`Error::render`] against the same `source`.
///
/// # Examples
/// ```
/// use soch::{
///     interpreter::{evaluator::core::Interpreter, value::numeric::Numeric},
///     run,
///     util::position::Source,
/// };
///
/// let mut interpreter = Interpreter::new();
///
/// run(&Source::new("<stdin>", "soch x 5 hai"), &mut interpreter).unwrap();
/// let x = run(&Source::new("<stdin>", "x * 2"), &mut interpreter).unwrap();
/// assert_eq!(x.map(|n| n.value), Some(Numeric::Int(10)));
///
/// // A fresh interpreter knows nothing about `x`.
/// let error = run(&Source::new("<stdin>", "x"), &mut Interpreter::new()).unwrap_err();
/// assert_eq!(error.to_string(), "Runtime Error: x is not defined!");
/// ```
#[instrument(level = "debug", skip_all, fields(file = source.name()))]
pub fn run(source: &Source, interpreter: &mut Interpreter) -> Result<Option<Number>, Error> {
    let tokens = tokenize(source.text()).inspect_err(|e| debug!(%e, "lexing failed"))?;
    debug!(count = tokens.len(), "tokenized");

    let ast = Parser::new(&tokens).parse()
                                  .inspect_err(|e| debug!(%e, "parsing failed"))?;
    debug!(span = %ast.span(), "parsed");

    let value = interpreter.visit(&ast)
                           .inspect_err(|e| debug!(%e, "evaluation failed"))?;
    debug!(value = ?value.map(|n| n.value), "evaluated");

    Ok(value)
}

/// Runs `text` in a fresh interpreter and renders any error.
///
/// A convenience for one-shot evaluation: the value on success, or the full
/// report (as produced by [`Error::render`]) on failure.
///
/// # Examples
/// ```
/// use soch::get_result;
///
/// assert_eq!(get_result("demo", "2 + 3 * 4").unwrap().unwrap().to_string(), "14");
///
/// let report = get_result("demo", "10 / 0").unwrap_err();
/// assert!(report.ends_with("Runtime Error: Division by zero not defined"));
/// ```
pub fn get_result(filename: &str, text: &str) -> Result<Option<Number>, String> {
    let source = Source::new(filename, text);
    run(&source, &mut Interpreter::new()).map_err(|e| e.render(&source))
}
