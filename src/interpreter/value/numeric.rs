use std::{cmp::Ordering, fmt};

use crate::util::num::{checked_int_pow, f64_to_i64_trunc, i64_to_f64};

/// A scalar value: either a 64-bit integer or a 64-bit float.
///
/// Integer operations stay integral while the result fits in an `i64` and
/// fall back to floating point otherwise. Any operation with a float operand
/// produces a float. Division always produces a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Numeric {
    fn from(value: bool) -> Self {
        Self::Int(i64::from(value))
    }
}

/// Keeps an integer result if one was produced, otherwise computes the
/// floating point fallback.
fn integral_or<F>(checked: Option<i64>, fallback: F) -> Numeric
    where F: FnOnce() -> f64
{
    checked.map_or_else(|| Numeric::Float(fallback()), Numeric::Int)
}

impl Numeric {
    /// Returns the value as an `f64`, rounding large integers.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => i64_to_f64(n),
            Self::Float(f) => f,
        }
    }

    /// Truthiness: anything other than zero is true.
    ///
    /// # Example
    /// ```
    /// use soch::interpreter::value::numeric::Numeric;
    ///
    /// assert!(Numeric::Int(-3).is_true());
    /// assert!(!Numeric::Float(0.0).is_true());
    /// ```
    #[must_use]
    pub fn is_true(self) -> bool {
        !self.is_zero()
    }

    /// The value as an integer, truncating floats toward zero.
    ///
    /// # Example
    /// ```
    /// use soch::interpreter::value::numeric::Numeric;
    ///
    /// assert_eq!(Numeric::Float(-2.5).truncated(), -2);
    /// assert_eq!(Numeric::Int(7).truncated(), 7);
    /// ```
    #[must_use]
    pub const fn truncated(self) -> i64 {
        match self {
            Self::Int(n) => n,
            Self::Float(f) => f64_to_i64_trunc(f),
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(n) => n == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    #[must_use]
    pub fn plus(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                integral_or(a.checked_add(b), || i64_to_f64(a) + i64_to_f64(b))
            },
            _ => Self::Float(self.as_f64() + rhs.as_f64()),
        }
    }

    #[must_use]
    pub fn subtract(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                integral_or(a.checked_sub(b), || i64_to_f64(a) - i64_to_f64(b))
            },
            _ => Self::Float(self.as_f64() - rhs.as_f64()),
        }
    }

    #[must_use]
    pub fn multiply(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                integral_or(a.checked_mul(b), || i64_to_f64(a) * i64_to_f64(b))
            },
            _ => Self::Float(self.as_f64() * rhs.as_f64()),
        }
    }

    /// Divides `self` by `rhs`, always producing a float.
    ///
    /// Returns `None` when `rhs` is zero.
    ///
    /// # Example
    /// ```
    /// use soch::interpreter::value::numeric::Numeric;
    ///
    /// assert_eq!(Numeric::Int(10).divide(Numeric::Int(4)), Some(Numeric::Float(2.5)));
    /// assert_eq!(Numeric::Int(1).divide(Numeric::Float(0.0)), None);
    /// ```
    #[must_use]
    pub fn divide(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        Some(Self::Float(self.as_f64() / rhs.as_f64()))
    }

    /// Raises `self` to the power `rhs`.
    ///
    /// Integer bases with non-negative integer exponents stay integral while
    /// the result fits; everything else is computed with `powf`.
    ///
    /// # Example
    /// ```
    /// use soch::interpreter::value::numeric::Numeric;
    ///
    /// assert_eq!(Numeric::Int(2).power(Numeric::Int(10)), Numeric::Int(1024));
    /// assert_eq!(Numeric::Int(2).power(Numeric::Int(-1)), Numeric::Float(0.5));
    /// ```
    #[must_use]
    pub fn power(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(base), Self::Int(exponent)) => {
                integral_or(checked_int_pow(base, exponent), || {
                    i64_to_f64(base).powf(i64_to_f64(exponent))
                })
            },
            _ => Self::Float(self.as_f64().powf(rhs.as_f64())),
        }
    }

    /// Numeric equality across representations, so `5 = 5.0` holds.
    #[must_use]
    pub fn numeric_eq(self, rhs: Self) -> bool {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => self.as_f64() == rhs.as_f64(),
        }
    }

    /// Orders two values numerically. `None` only when a NaN is involved.
    #[must_use]
    pub fn numeric_cmp(self, rhs: Self) -> Option<Ordering> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&rhs.as_f64()),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            // Whole floats keep their decimal point so `10 / 2` shows as `5.0`.
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{x:.1}")
            },
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}
