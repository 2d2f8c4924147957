//! Precedence-climbing evaluator.
//!
//! `climb(min)` reads one primary operand, then folds operators whose tier is
//! at least `min`. The right operand is parsed with the threshold returned by
//! [`InfixEntry::rhs_min_tier`](crate::operator::InfixEntry::rhs_min_tier),
//! which yields left-associative grouping for every operator in the table.

use crate::Number;
use crate::error::EvalError;
use crate::operator::{LOWEST, Tier};
use crate::tokenizer::{Token, TokenKind};

use super::errors::SyntaxError;
use super::token_stream::TokenStream;
use super::{Evaluator, fold, run};

/// Evaluates by looping over operators with a minimum-tier threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecedenceClimbing;

impl Evaluator for PrecedenceClimbing {
    fn evaluate(&self, src: &str) -> Result<Number, EvalError> {
        run(src, |ts| climb(ts, LOWEST))
    }
}

fn climb(ts: &mut TokenStream<'_>, min_tier: Tier) -> Result<Number, EvalError> {
    let mut lhs = primary(ts)?;
    while let Some(entry) = ts.peek_infix() {
        if entry.tier < min_tier {
            break;
        }
        ts.advance()?;
        let rhs = climb(ts, entry.rhs_min_tier())?;
        lhs = fold(entry.op, lhs, rhs)?;
    }
    Ok(lhs)
}

fn primary(ts: &mut TokenStream<'_>) -> Result<Number, EvalError> {
    match ts.peek_kind() {
        Some(TokenKind::Number) => {
            ts.advance()?;
            let Some(value) = ts.current().and_then(Token::number) else {
                unreachable!("number token without a value");
            };
            Ok(value)
        }
        Some(TokenKind::LParen) => {
            ts.open_group()?;
            let value = climb(ts, LOWEST)?;
            ts.close_group()?;
            Ok(value)
        }
        _ => Err(SyntaxError::ExpectedOperand { found: ts.found() }.into()),
    }
}
