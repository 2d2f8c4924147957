//! Top-level error returned by evaluation.

use thiserror::Error;

use crate::operator::ArithmeticError;
use crate::parser::SyntaxError;
use crate::tokenizer::LexError;

/// Any fault that aborts an evaluation.
///
/// Faults are fatal: no partial value is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}
