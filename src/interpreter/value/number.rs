use std::fmt;

use crate::{interpreter::value::numeric::Numeric, util::position::Span};

/// A runtime number together with the span of the expression that produced
/// it.
///
/// Numbers are never mutated: every operation builds a new one. Reading a
/// variable hands out a copy re-anchored at the access site with
/// [`Number::with_span`], so the stored binding keeps its own span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    /// The numeric payload.
    pub value: Numeric,
    /// Where in the source this number came from.
    pub span:  Span,
}

impl Number {
    /// Creates a number anchored at `span`.
    ///
    /// # Example
    /// ```
    /// use soch::{
    ///     interpreter::value::{number::Number, numeric::Numeric},
    ///     util::position::Span,
    /// };
    ///
    /// let n = Number::new(7, Span::default());
    /// assert_eq!(n.value, Numeric::Int(7));
    /// ```
    pub fn new(value: impl Into<Numeric>, span: Span) -> Self {
        Self { value: value.into(),
               span }
    }

    /// Returns a copy of this number re-anchored at `span`.
    #[must_use]
    pub const fn with_span(self, span: Span) -> Self {
        Self { value: self.value,
               span }
    }

    /// Truthiness used by conditions and the logical operators.
    #[must_use]
    pub fn is_true(&self) -> bool {
        self.value.is_true()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
