//! Library crate for arith-eval.
//!
//! Tokenises arithmetic expressions and evaluates them in a single pass with
//! either a recursive-descent or a precedence-climbing evaluator.

#![forbid(unsafe_code)]

pub mod error;
pub mod number;
pub mod operator;
pub mod parser;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use error::EvalError;
pub use number::Number;
pub use operator::{ArithmeticError, BinaryOp};
pub use parser::{
    Evaluator, MAX_NESTING, PrecedenceClimbing, RecursiveDescent, Strategy, SyntaxError,
    UnknownStrategy, evaluate, evaluate_with,
};
pub use tokenizer::{LexError, Lexeme, Source, Token, TokenKind, tokenize};
