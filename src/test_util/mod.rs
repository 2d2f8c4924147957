//! Helpers for generating expressions and asserting evaluation outcomes in
//! tests.
//!
//! [`generator`] produces random well-formed expressions together with their
//! expected values; the assertion helpers run a source string through every
//! [`Strategy`](crate::Strategy) and compare the outcomes.

mod assertions;
pub mod generator;

pub use assertions::{FaultKind, assert_evaluates, assert_fault};
pub use generator::{ExprTree, expr_tree, expr_tree_with};
