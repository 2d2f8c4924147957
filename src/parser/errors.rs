//! Syntax faults raised by the evaluators.

use std::fmt;

use thiserror::Error;

use crate::tokenizer::TokenKind;

use super::MAX_NESTING;

/// What the parser saw where the grammar required something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Token { kind: TokenKind, offset: usize },
    EndOfInput { offset: usize },
}

impl Found {
    /// Byte offset in the original text.
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Self::Token { offset, .. } | Self::EndOfInput { offset } => offset,
        }
    }

    #[must_use]
    pub const fn kind(self) -> Option<TokenKind> {
        match self {
            Self::Token { kind, .. } => Some(kind),
            Self::EndOfInput { .. } => None,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token { kind, offset } => write!(f, "{kind} at offset {offset}"),
            Self::EndOfInput { .. } => f.write_str("end of input"),
        }
    }
}

/// The token sequence does not match the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A mandatory token, such as a closing parenthesis, is missing.
    #[error("expected {expected}, found {found}")]
    Expected { expected: TokenKind, found: Found },
    /// Neither a number nor an opening parenthesis starts the operand.
    #[error("expected a number or '(', found {found}")]
    ExpectedOperand { found: Found },
    /// Input continues after a complete expression.
    #[error("unexpected {found} after complete expression")]
    UnexpectedToken { found: Found },
    /// An opening parenthesis would exceed [`MAX_NESTING`] open groups.
    #[error("{found} nests deeper than {limit} groups", limit = MAX_NESTING)]
    NestingTooDeep { found: Found },
}

impl SyntaxError {
    /// The offending position, whichever variant this is.
    #[must_use]
    pub const fn found(self) -> Found {
        match self {
            Self::Expected { found, .. }
            | Self::ExpectedOperand { found }
            | Self::UnexpectedToken { found }
            | Self::NestingTooDeep { found } => found,
        }
    }
}
