/// Core parsing logic.
///
/// Defines the [`core::Parser`] cursor over the token sequence, the
/// top-level entry point, and the `expr` rule covering assignments and the
/// `aur`/`ya` chain.
pub mod core;

/// Binary operator parsing.
///
/// Implements the shared operator-chain helper and the comparison,
/// additive, multiplicative and power levels built on it.
pub mod binary;

/// Prefix operators and atoms.
///
/// Handles unary `+`/`-`, literals, variable reads and parenthesized
/// expressions.
pub mod unary;

/// Conditional expressions.
///
/// Parses `if .. then .. elif .. then .. else ..` into a single node.
pub mod conditional;
