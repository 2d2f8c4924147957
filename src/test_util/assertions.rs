//! Assertion helpers that run an expression through every strategy.

use crate::{EvalError, Evaluator, Number, Strategy};

/// Broad class of an evaluation fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Lexical,
    Syntax,
    Arithmetic,
}

impl From<&EvalError> for FaultKind {
    fn from(err: &EvalError) -> Self {
        match err {
            EvalError::Lex(_) => Self::Lexical,
            EvalError::Syntax(_) => Self::Syntax,
            EvalError::Arithmetic(_) => Self::Arithmetic,
        }
    }
}

/// Assert that every strategy evaluates `src` to `expected`.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use arith_eval::test_util::assert_evaluates;
/// assert_evaluates("2 + 3 * 4", 14_i64);
/// # }
/// ```
///
/// # Panics
/// Panics if any strategy fails or yields a different value.
#[track_caller]
pub fn assert_evaluates(src: &str, expected: impl Into<Number>) {
    let expected = expected.into();
    for strategy in Strategy::ALL {
        let value = strategy
            .evaluate(src)
            .unwrap_or_else(|e| panic!("{strategy} failed on {src:?}: {e}"));
        assert_eq!(value, expected, "{strategy} on {src:?}");
    }
}

/// Assert that every strategy rejects `src` with a fault of `kind`.
///
/// Returns the error produced by the default strategy for further checks.
///
/// # Panics
/// Panics if any strategy succeeds or raises a different kind of fault.
#[track_caller]
pub fn assert_fault(src: &str, kind: FaultKind) -> EvalError {
    let mut first = None;
    for strategy in Strategy::ALL {
        let Err(err) = strategy.evaluate(src) else {
            panic!("{strategy} accepted {src:?}, expected a {kind:?} fault");
        };
        assert_eq!(FaultKind::from(&err), kind, "{strategy} on {src:?}: {err}");
        first.get_or_insert(err);
    }
    first.unwrap_or_else(|| panic!("no strategies to run"))
}
