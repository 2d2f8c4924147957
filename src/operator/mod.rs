//! Binary arithmetic operators and their evaluation rules.
//!
//! [`BinaryOp`] is a closed set of four operators. Evaluation is a single
//! `match`; binding strength lives in the constant table of the
//! [`precedence`] submodule.

mod precedence;

use std::fmt;

use thiserror::Error;

use crate::Number;

pub use precedence::{
    ADDITIVE, Associativity, InfixEntry, LOWEST, MULTIPLICATIVE, Tier, infix_entry,
};

/// One of the four supported infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Faults raised while folding two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The right-hand operand of `/` was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// An integer `+`, `-` or `*` left the range of `i64`.
    #[error("integer overflow in '{op}'")]
    Overflow { op: BinaryOp },
}

impl BinaryOp {
    /// The source character for this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Combine `lhs` and `rhs`; `lhs` is always the accumulated left operand.
    ///
    /// Two integers stay integral for `+`, `-` and `*`. Any float operand
    /// promotes the operation to `f64`. Division is true division and
    /// always yields a float.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::DivisionByZero`] when dividing by zero and
    /// [`ArithmeticError::Overflow`] when integer arithmetic overflows.
    #[expect(
        clippy::float_arithmetic,
        reason = "float operands are part of the number model"
    )]
    pub fn apply(self, lhs: Number, rhs: Number) -> Result<Number, ArithmeticError> {
        match self {
            Self::Add => self.combine(lhs, rhs, i64::checked_add, |a, b| a + b),
            Self::Sub => self.combine(lhs, rhs, i64::checked_sub, |a, b| a - b),
            Self::Mul => self.combine(lhs, rhs, i64::checked_mul, |a, b| a * b),
            Self::Div if rhs.is_zero() => Err(ArithmeticError::DivisionByZero),
            Self::Div => Ok(Number::Float(lhs.as_f64() / rhs.as_f64())),
        }
    }

    fn combine(
        self,
        lhs: Number,
        rhs: Number,
        int: fn(i64, i64) -> Option<i64>,
        float: fn(f64, f64) -> f64,
    ) -> Result<Number, ArithmeticError> {
        match (lhs, rhs) {
            (Number::Int(a), Number::Int(b)) => int(a, b)
                .map(Number::Int)
                .ok_or(ArithmeticError::Overflow { op: self }),
            _ => Ok(Number::Float(float(lhs.as_f64(), rhs.as_f64()))),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::{ArithmeticError, BinaryOp};
    use crate::Number;
    use rstest::rstest;

    #[rstest]
    #[case(BinaryOp::Add, Number::Int(2), Number::Int(3), Number::Int(5))]
    #[case(BinaryOp::Sub, Number::Int(2), Number::Int(3), Number::Int(-1))]
    #[case(BinaryOp::Mul, Number::Int(4), Number::Int(3), Number::Int(12))]
    #[case(BinaryOp::Div, Number::Int(1), Number::Int(2), Number::Float(0.5))]
    #[case(BinaryOp::Add, Number::Float(1.5), Number::Int(2), Number::Float(3.5))]
    #[case(BinaryOp::Mul, Number::Int(2), Number::Float(0.25), Number::Float(0.5))]
    fn applies_operator(
        #[case] op: BinaryOp,
        #[case] lhs: Number,
        #[case] rhs: Number,
        #[case] expected: Number,
    ) {
        let result = op
            .apply(lhs, rhs)
            .unwrap_or_else(|e| panic!("{lhs} {op} {rhs} failed: {e}"));
        assert_eq!(result, expected);
    }

    #[rstest]
    fn subtraction_keeps_operand_order() {
        let result = BinaryOp::Sub.apply(Number::Int(10), Number::Int(4));
        assert_eq!(result, Ok(Number::Int(6)));
    }

    #[rstest]
    fn integer_division_promotes_to_float() {
        let result = BinaryOp::Div.apply(Number::Int(6), Number::Int(3));
        assert!(matches!(result, Ok(Number::Float(f)) if (f - 2.0).abs() < f64::EPSILON));
    }

    #[rstest]
    #[case(Number::Int(0))]
    #[case(Number::Float(0.0))]
    fn division_by_zero_is_reported(#[case] rhs: Number) {
        assert_eq!(
            BinaryOp::Div.apply(Number::Int(1), rhs),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[rstest]
    #[case(BinaryOp::Add, i64::MAX, 1)]
    #[case(BinaryOp::Sub, i64::MIN, 1)]
    #[case(BinaryOp::Mul, i64::MAX, 2)]
    fn integer_overflow_is_reported(#[case] op: BinaryOp, #[case] a: i64, #[case] b: i64) {
        assert_eq!(
            op.apply(Number::Int(a), Number::Int(b)),
            Err(ArithmeticError::Overflow { op })
        );
    }

    #[rstest]
    fn overflow_message_names_operator() {
        let err = ArithmeticError::Overflow { op: BinaryOp::Mul };
        assert_eq!(err.to_string(), "integer overflow in '*'");
    }
}
