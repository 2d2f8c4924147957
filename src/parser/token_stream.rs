//! Two-slot token cursor shared by both evaluators.
//!
//! Holds the last consumed token and one token of lookahead over a lazy
//! [`Lexer`]. Pulling the next token may surface a lexical fault, so every
//! primitive that advances returns a `Result`.

use crate::error::EvalError;
use crate::operator::{BinaryOp, InfixEntry, Tier, infix_entry};
use crate::tokenizer::{LexError, Lexer, Source, Token, TokenKind};

use super::MAX_NESTING;
use super::errors::{Found, SyntaxError};

pub(super) struct TokenStream<'a> {
    tokens: Lexer<'a>,
    current: Option<Token>,
    lookahead: Option<Token>,
    end_offset: usize,
    depth: usize,
}

impl<'a> TokenStream<'a> {
    pub(super) fn new(source: &'a Source) -> Result<Self, LexError> {
        let mut tokens = source.tokens();
        let lookahead = tokens.next().transpose()?;
        Ok(Self {
            tokens,
            current: None,
            lookahead,
            end_offset: source.end_offset(),
            depth: 0,
        })
    }

    /// The most recently consumed token.
    pub(super) fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    pub(super) fn peek_kind(&self) -> Option<TokenKind> {
        self.lookahead.map(|t| t.kind)
    }

    /// Precedence entry of the lookahead when it is an infix operator.
    pub(super) fn peek_infix(&self) -> Option<InfixEntry> {
        self.peek_kind().and_then(infix_entry)
    }

    pub(super) fn advance(&mut self) -> Result<(), LexError> {
        self.current = self.lookahead.take();
        self.lookahead = self.tokens.next().transpose()?;
        Ok(())
    }

    /// Consume the lookahead when it has `kind`; leave the stream untouched
    /// otherwise.
    pub(super) fn accept(&mut self, kind: TokenKind) -> Result<bool, LexError> {
        if self.peek_kind() == Some(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume the lookahead when it is an operator of exactly `tier`.
    pub(super) fn accept_operator(&mut self, tier: Tier) -> Result<Option<BinaryOp>, LexError> {
        match self.peek_infix() {
            Some(entry) if entry.tier == tier => {
                self.advance()?;
                Ok(Some(entry.op))
            }
            _ => Ok(None),
        }
    }

    pub(super) fn expect(&mut self, kind: TokenKind) -> Result<(), EvalError> {
        if self.accept(kind)? {
            Ok(())
        } else {
            Err(SyntaxError::Expected {
                expected: kind,
                found: self.found(),
            }
            .into())
        }
    }

    /// Consume an opening parenthesis and enter its group.
    ///
    /// Fails once [`MAX_NESTING`] groups are already open, before the
    /// caller recurses any deeper.
    pub(super) fn open_group(&mut self) -> Result<bool, EvalError> {
        let found = self.found();
        if !self.accept(TokenKind::LParen)? {
            return Ok(false);
        }
        if self.depth >= MAX_NESTING {
            return Err(SyntaxError::NestingTooDeep { found }.into());
        }
        self.depth = self.depth.saturating_add(1);
        Ok(true)
    }

    /// Require the closing parenthesis of the innermost open group.
    pub(super) fn close_group(&mut self) -> Result<(), EvalError> {
        self.expect(TokenKind::RParen)?;
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    /// Describe the lookahead for diagnostics.
    pub(super) fn found(&self) -> Found {
        self.lookahead.map_or(
            Found::EndOfInput {
                offset: self.end_offset,
            },
            |t| Found::Token {
                kind: t.kind,
                offset: t.offset,
            },
        )
    }

    /// Require that the whole input has been consumed.
    pub(super) fn finish(&self) -> Result<(), SyntaxError> {
        if self.lookahead.is_some() {
            Err(SyntaxError::UnexpectedToken {
                found: self.found(),
            })
        } else {
            Ok(())
        }
    }
}
