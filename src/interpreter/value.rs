/// Raw numeric payloads.
///
/// Defines [`numeric::Numeric`], the integer-or-float scalar every
/// arithmetic, comparison and logical operator works on. Integer results that
/// overflow `i64` are promoted to floating point instead of failing.
pub mod numeric;
/// Runtime numbers.
///
/// Defines [`number::Number`], a [`numeric::Numeric`] paired with the span of
/// the expression that produced it.
pub mod number;
