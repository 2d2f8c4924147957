//! Lexical analysis for arithmetic expressions.
//!
//! Whitespace is removed from the input before scanning, so it never
//! separates or produces tokens. The remaining text is matched with a
//! `logos` recogniser for the four operator symbols, parentheses and
//! unsigned decimal numbers. [`Lexer`] yields tokens lazily and halts at the
//! first character no recogniser accepts.

use std::fmt;
use std::iter::FusedIterator;

use logos::Logos;
use thiserror::Error;

use crate::Number;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[0-9]+(?:\.[0-9]+)?")]
    Number,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl TokenKind {
    /// Human readable name used in diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Payload of a token: the decoded value of a number, or the symbol matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lexeme {
    Number(Number),
    Symbol(char),
}

/// A classified fragment of the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Lexeme,
    /// Byte offset of the token in the text originally supplied, whitespace
    /// included.
    pub offset: usize,
}

impl Token {
    /// The decoded value for a [`TokenKind::Number`] token.
    #[must_use]
    pub fn number(&self) -> Option<Number> {
        match self.lexeme {
            Lexeme::Number(n) => Some(n),
            Lexeme::Symbol(_) => None,
        }
    }
}

/// Faults raised while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No recogniser accepts the character at `offset`.
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },
    /// An integer literal does not fit in 64 bits.
    #[error("number {literal} at offset {offset} is out of range")]
    NumberOutOfRange { literal: String, offset: usize },
}

/// Input text with whitespace removed.
///
/// Keeps a byte-level map back to the original text so tokens and errors can
/// report positions the caller recognises.
#[derive(Debug, Clone)]
pub struct Source {
    text: String,
    offsets: Vec<usize>,
    original_len: usize,
}

impl Source {
    #[must_use]
    pub fn new(src: &str) -> Self {
        let mut text = String::with_capacity(src.len());
        let mut offsets = Vec::with_capacity(src.len());
        for (idx, ch) in src.char_indices().filter(|(_, c)| !c.is_whitespace()) {
            text.push(ch);
            offsets.extend(idx..idx + ch.len_utf8());
        }
        Self {
            text,
            offsets,
            original_len: src.len(),
        }
    }

    /// The text that is actually scanned.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Start a fresh scan from the beginning of the input.
    #[must_use]
    pub fn tokens(&self) -> Lexer<'_> {
        Lexer {
            inner: RawToken::lexer(&self.text),
            source: self,
            halted: false,
        }
    }

    /// Offset in the original text for a byte offset in [`Self::as_str`].
    ///
    /// Offsets past the end map to the length of the original text.
    #[must_use]
    pub fn original_offset(&self, compact: usize) -> usize {
        self.offsets
            .get(compact)
            .copied()
            .unwrap_or(self.original_len)
    }

    /// Offset reported for errors found after the last token.
    #[must_use]
    pub fn end_offset(&self) -> usize {
        self.original_len
    }
}

/// Lazy token sequence over a [`Source`].
///
/// Yields `Some(Err(_))` at most once; the iterator is exhausted afterwards.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, RawToken>,
    source: &'a Source,
    halted: bool,
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let result = self.inner.next()?;
        let start = self.inner.span().start;
        let offset = self.source.original_offset(start);
        let item = match result {
            Ok(raw) => decode(raw, self.inner.slice(), offset),
            Err(()) => {
                let found = self
                    .source
                    .as_str()
                    .get(start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(LexError::UnexpectedChar { found, offset })
            }
        };
        if item.is_err() {
            self.halted = true;
        }
        Some(item)
    }
}

impl FusedIterator for Lexer<'_> {}

fn decode(raw: RawToken, text: &str, offset: usize) -> Result<Token, LexError> {
    let (kind, lexeme) = match raw {
        RawToken::Number => (TokenKind::Number, Lexeme::Number(decode_number(text, offset)?)),
        RawToken::Plus => (TokenKind::Plus, Lexeme::Symbol('+')),
        RawToken::Minus => (TokenKind::Minus, Lexeme::Symbol('-')),
        RawToken::Star => (TokenKind::Star, Lexeme::Symbol('*')),
        RawToken::Slash => (TokenKind::Slash, Lexeme::Symbol('/')),
        RawToken::LParen => (TokenKind::LParen, Lexeme::Symbol('(')),
        RawToken::RParen => (TokenKind::RParen, Lexeme::Symbol(')')),
    };
    Ok(Token {
        kind,
        lexeme,
        offset,
    })
}

fn decode_number(text: &str, offset: usize) -> Result<Number, LexError> {
    let decoded = if text.contains('.') {
        text.parse::<f64>().ok().map(Number::Float)
    } else {
        text.parse::<i64>().ok().map(Number::Int)
    };
    decoded.ok_or_else(|| LexError::NumberOutOfRange {
        literal: text.to_string(),
        offset,
    })
}

/// Scan the whole of `src` into a vector of tokens.
///
/// # Examples
///
/// ```rust
/// use arith_eval::{TokenKind, tokenize};
///
/// let tokens = tokenize("(1 + 2.5)").unwrap_or_default();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds.len(), 5);
/// assert_eq!(kinds[0], TokenKind::LParen);
/// ```
///
/// # Errors
/// Returns the first [`LexError`] encountered.
pub fn tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    Source::new(src).tokens().collect()
}
