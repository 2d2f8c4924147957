//! Numeric values produced by literals and operator folds.
//!
//! A literal without a decimal point decodes to [`Number::Int`]; one with a
//! decimal point decodes to [`Number::Float`]. Arithmetic promotes to
//! floating point as soon as either operand is a float, see
//! [`crate::operator::BinaryOp::apply`].

use std::fmt;

/// Result of evaluating an expression or decoding a numeric literal.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Widen the value to `f64`.
    ///
    /// Integers beyond 2^53 lose precision, matching the usual promotion of
    /// mixed integer and float arithmetic.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "promotion to f64 is the documented numeric rule"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(f) => f,
        }
    }

    /// Returns `true` when the value is numerically zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(n) => n == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }
}

/// Numeric equality: `Int(2) == Float(2.0)`.
impl PartialEq for Number {
    #[expect(clippy::float_cmp, reason = "equality of evaluated values is exact")]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(n) => write!(f, "{n}"),
            // Keep a fractional digit so floats stay distinguishable from ints.
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}
