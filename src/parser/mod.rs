//! Single-pass evaluation of arithmetic expressions.
//!
//! Two traversal strategies share one contract, [`Evaluator`]:
//! [`RecursiveDescent`] walks one function per grammar rule, while
//! [`PrecedenceClimbing`] loops over operators with a minimum-tier threshold.
//! Both pull tokens lazily through a two-slot cursor and fold values as soon
//! as a rule completes; no syntax tree is built. Both group every operator
//! left to right, so they agree on all input.

mod errors;
mod precedence_climbing;
mod recursive_descent;
mod token_stream;


use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use thiserror::Error;

use crate::Number;
use crate::error::EvalError;
use crate::operator::BinaryOp;
use crate::tokenizer::Source;

pub use errors::{Found, SyntaxError};
pub use precedence_climbing::PrecedenceClimbing;
pub use recursive_descent::RecursiveDescent;

use token_stream::TokenStream;

/// Deepest run of open parentheses either strategy will descend into.
pub const MAX_NESTING: usize = 256;

/// Turns expression text into a value.
pub trait Evaluator {
    /// Evaluate `src` completely.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or arithmetic fault encountered.
    fn evaluate(&self, src: &str) -> Result<Number, EvalError>;
}

/// Selects a traversal strategy at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    #[default]
    RecursiveDescent,
    PrecedenceClimbing,
}

impl Strategy {
    pub const ALL: [Self; 2] = [Self::RecursiveDescent, Self::PrecedenceClimbing];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RecursiveDescent => "recursive-descent",
            Self::PrecedenceClimbing => "precedence-climbing",
        }
    }
}

impl Evaluator for Strategy {
    fn evaluate(&self, src: &str) -> Result<Number, EvalError> {
        match self {
            Self::RecursiveDescent => RecursiveDescent.evaluate(src),
            Self::PrecedenceClimbing => PrecedenceClimbing.evaluate(src),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy name that matches no [`Strategy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?}; expected recursive-descent or precedence-climbing")]
pub struct UnknownStrategy(String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Evaluate `src` by recursive descent.
///
/// # Examples
///
/// ```rust
/// use arith_eval::{Number, evaluate};
///
/// assert_eq!(evaluate("1 - 2 - 3"), Ok(Number::Int(-4)));
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(Number::Int(20)));
/// ```
///
/// # Errors
/// Returns the first lexical, syntax or arithmetic fault encountered.
pub fn evaluate(src: &str) -> Result<Number, EvalError> {
    evaluate_with(src, Strategy::default())
}

/// Evaluate `src` with the chosen traversal strategy.
///
/// # Errors
/// Returns the first lexical, syntax or arithmetic fault encountered.
pub fn evaluate_with(src: &str, strategy: Strategy) -> Result<Number, EvalError> {
    debug!("evaluating {src:?} by {strategy}");
    let result = strategy.evaluate(src);
    if let Err(err) = &result {
        debug!("evaluation of {src:?} failed: {err}");
    }
    result
}

/// Drive `start` over the tokens of `src` and require that it consumes them
/// all.
fn run<F>(src: &str, start: F) -> Result<Number, EvalError>
where
    F: FnOnce(&mut TokenStream<'_>) -> Result<Number, EvalError>,
{
    let source = Source::new(src);
    let mut ts = TokenStream::new(&source)?;
    let value = start(&mut ts)?;
    ts.finish()?;
    Ok(value)
}

fn fold(op: BinaryOp, lhs: Number, rhs: Number) -> Result<Number, EvalError> {
    let value = op.apply(lhs, rhs)?;
    trace!("fold {lhs} {op} {rhs} = {value}");
    Ok(value)
}
