//! Shared test utilities for integration tests.
//!
//! These helpers mirror a subset of the `arith_eval::test_util` module
//! without requiring the `test-support` feature.

use arith_eval::{EvalError, Evaluator, Number, Strategy};

/// Evaluate `src` with every strategy, in [`Strategy::ALL`] order.
#[must_use]
pub fn evaluate_all(src: &str) -> Vec<Result<Number, EvalError>> {
    Strategy::ALL
        .iter()
        .map(|strategy| strategy.evaluate(src))
        .collect()
}

#[must_use]
pub fn is_lexical(result: &Result<Number, EvalError>) -> bool {
    matches!(result, Err(EvalError::Lex(_)))
}

#[must_use]
pub fn is_syntax(result: &Result<Number, EvalError>) -> bool {
    matches!(result, Err(EvalError::Syntax(_)))
}
