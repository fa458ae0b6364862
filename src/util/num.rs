/// Converts an `i64` to `f64`.
///
/// Magnitudes beyond `2^53` are rounded to the nearest representable float.
/// Callers reach for this once integer arithmetic has overflowed or when an
/// operation is defined on floats only, so rounding is the intended outcome.
///
/// # Example
/// ```
/// use soch::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Raises an integer to an integer power without leaving `i64`.
///
/// Returns `None` when the exponent is negative, too large for `u32`, or
/// when the result overflows. The caller then switches to floating point.
///
/// # Example
/// ```
/// use soch::util::num::checked_int_pow;
///
/// assert_eq!(checked_int_pow(2, 9), Some(512));
/// assert_eq!(checked_int_pow(2, -1), None);
/// assert_eq!(checked_int_pow(10, 40), None);
/// ```
#[must_use]
pub fn checked_int_pow(base: i64, exponent: i64) -> Option<i64> {
    let exponent = u32::try_from(exponent).ok()?;
    base.checked_pow(exponent)
}

/// Truncates an `f64` toward zero into an `i64`.
///
/// Out-of-range values saturate at `i64::MIN` / `i64::MAX` and NaN maps to
/// `0`.
///
/// # Example
/// ```
/// use soch::util::num::f64_to_i64_trunc;
///
/// assert_eq!(f64_to_i64_trunc(2.9), 2);
/// assert_eq!(f64_to_i64_trunc(-1.5), -1);
/// assert_eq!(f64_to_i64_trunc(f64::INFINITY), i64::MAX);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn f64_to_i64_trunc(value: f64) -> i64 {
    value as i64
}
