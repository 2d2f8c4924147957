//! Recursive-descent evaluator.
//!
//! One function per production, each folding its value as soon as the rule
//! completes:
//!
//! ```text
//! expression := term { ("+" | "-") term }
//! term       := factor { ("*" | "/") factor }
//! factor     := NUMBER | "(" expression ")"
//! ```

use crate::Number;
use crate::error::EvalError;
use crate::operator::{ADDITIVE, MULTIPLICATIVE};
use crate::tokenizer::{Token, TokenKind};

use super::errors::SyntaxError;
use super::token_stream::TokenStream;
use super::{Evaluator, fold, run};

/// Evaluates with one function per grammar rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveDescent;

impl Evaluator for RecursiveDescent {
    fn evaluate(&self, src: &str) -> Result<Number, EvalError> {
        run(src, expression)
    }
}

fn expression(ts: &mut TokenStream<'_>) -> Result<Number, EvalError> {
    let mut value = term(ts)?;
    while let Some(op) = ts.accept_operator(ADDITIVE)? {
        let rhs = term(ts)?;
        value = fold(op, value, rhs)?;
    }
    Ok(value)
}

fn term(ts: &mut TokenStream<'_>) -> Result<Number, EvalError> {
    let mut value = factor(ts)?;
    while let Some(op) = ts.accept_operator(MULTIPLICATIVE)? {
        let rhs = factor(ts)?;
        value = fold(op, value, rhs)?;
    }
    Ok(value)
}

fn factor(ts: &mut TokenStream<'_>) -> Result<Number, EvalError> {
    if ts.accept(TokenKind::Number)? {
        let Some(value) = ts.current().and_then(Token::number) else {
            unreachable!("number token without a value");
        };
        return Ok(value);
    }
    if ts.open_group()? {
        let value = expression(ts)?;
        ts.close_group()?;
        return Ok(value);
    }
    Err(SyntaxError::ExpectedOperand { found: ts.found() }.into())
}
