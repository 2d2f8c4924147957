//! Random expression generation for property tests.
//!
//! Trees are built from integer leaves in `1..=100`, binary nodes with a
//! random operator and parenthesised groups. A tree can be rendered exactly
//! as generated, where binary nodes carry no brackets of their own, or fully
//! bracketed so that the text groups the way the tree does.

use std::fmt;

use proptest::prelude::*;
use proptest::sample::select;

use crate::{ArithmeticError, BinaryOp, Number};

/// All four operators, for use with [`expr_tree_with`].
pub const ALL_OPS: &[BinaryOp] = &[BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div];

/// A generated expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprTree {
    Number(i64),
    Binary {
        lhs: Box<ExprTree>,
        op: BinaryOp,
        rhs: Box<ExprTree>,
    },
    Group(Box<ExprTree>),
}

impl ExprTree {
    /// Render the expression as generated, e.g. `1 + (2 - 3) * 4`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render with every binary node wrapped in parentheses.
    #[must_use]
    pub fn render_grouped(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Binary { lhs, op, rhs } => {
                format!("({} {op} {})", lhs.render_grouped(), rhs.render_grouped())
            }
            Self::Group(inner) => inner.render_grouped(),
        }
    }

    /// The value the tree denotes, folding children left before right.
    ///
    /// # Errors
    /// Propagates the first [`ArithmeticError`] raised by a fold.
    pub fn value(&self) -> Result<Number, ArithmeticError> {
        match self {
            Self::Number(n) => Ok(Number::Int(*n)),
            Self::Binary { lhs, op, rhs } => {
                let lhs = lhs.value()?;
                let rhs = rhs.value()?;
                op.apply(lhs, rhs)
            }
            Self::Group(inner) => inner.value(),
        }
    }
}

impl fmt::Display for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Binary { lhs, op, rhs } => write!(f, "{lhs} {op} {rhs}"),
            Self::Group(inner) => write!(f, "({inner})"),
        }
    }
}

/// Integer leaves in `1..=100`.
pub fn leaf() -> impl Strategy<Value = ExprTree> {
    (1_i64..=100).prop_map(ExprTree::Number)
}

/// Expressions using any of the four operators.
pub fn expr_tree() -> impl Strategy<Value = ExprTree> {
    expr_tree_with(ALL_OPS)
}

/// Expressions restricted to `ops`, nested at most six levels deep.
pub fn expr_tree_with(ops: &'static [BinaryOp]) -> impl Strategy<Value = ExprTree> {
    leaf().prop_recursive(6, 64, 2, move |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| ExprTree::Group(Box::new(e))),
            (inner.clone(), select(ops), inner).prop_map(|(lhs, op, rhs)| ExprTree::Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            }),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::ExprTree;
    use crate::{BinaryOp, Number};
    use rstest::rstest;

    fn sample() -> ExprTree {
        // 1 + (2 - 3) * 4
        ExprTree::Binary {
            lhs: Box::new(ExprTree::Binary {
                lhs: Box::new(ExprTree::Number(1)),
                op: BinaryOp::Add,
                rhs: Box::new(ExprTree::Group(Box::new(ExprTree::Binary {
                    lhs: Box::new(ExprTree::Number(2)),
                    op: BinaryOp::Sub,
                    rhs: Box::new(ExprTree::Number(3)),
                }))),
            }),
            op: BinaryOp::Mul,
            rhs: Box::new(ExprTree::Number(4)),
        }
    }

    #[rstest]
    fn renders_as_generated() {
        assert_eq!(sample().render(), "1 + (2 - 3) * 4");
    }

    #[rstest]
    fn renders_fully_grouped() {
        assert_eq!(sample().render_grouped(), "((1 + (2 - 3)) * 4)");
    }

    #[rstest]
    fn value_follows_tree_shape() {
        assert_eq!(sample().value(), Ok(Number::Int(0)));
    }
}
