//! Operator precedence table.
//!
//! Binding strength for every infix token is defined once here and shared by
//! both traversal strategies, so they cannot disagree about grouping.

use crate::tokenizer::TokenKind;

use super::BinaryOp;

/// Precedence tier; a higher tier binds tighter.
pub type Tier = u8;

/// Threshold that admits every operator.
pub const LOWEST: Tier = 0;
/// `+` and `-`.
pub const ADDITIVE: Tier = 1;
/// `*` and `/`.
pub const MULTIPLICATIVE: Tier = 2;

/// How repeated operators of the same tier group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` is `(a op b) op c`.
    Left,
    /// `a op b op c` is `a op (b op c)`. Unused by the four operators;
    /// kept so a right-binding operator such as `^` can join the table.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfixEntry {
    pub tier: Tier,
    pub assoc: Associativity,
    pub op: BinaryOp,
}

impl InfixEntry {
    /// Minimum tier accepted when parsing the right-hand operand.
    ///
    /// Left associative operators demand strictly tighter binding on their
    /// right so that the next operator of the same tier folds into the outer
    /// loop instead of recursing.
    #[must_use]
    pub const fn rhs_min_tier(self) -> Tier {
        match self.assoc {
            Associativity::Left => self.tier.saturating_add(1),
            Associativity::Right => self.tier,
        }
    }
}

const INFIX_TABLE: &[(TokenKind, InfixEntry)] = &[
    (
        TokenKind::Star,
        InfixEntry {
            tier: MULTIPLICATIVE,
            assoc: Associativity::Left,
            op: BinaryOp::Mul,
        },
    ),
    (
        TokenKind::Slash,
        InfixEntry {
            tier: MULTIPLICATIVE,
            assoc: Associativity::Left,
            op: BinaryOp::Div,
        },
    ),
    (
        TokenKind::Plus,
        InfixEntry {
            tier: ADDITIVE,
            assoc: Associativity::Left,
            op: BinaryOp::Add,
        },
    ),
    (
        TokenKind::Minus,
        InfixEntry {
            tier: ADDITIVE,
            assoc: Associativity::Left,
            op: BinaryOp::Sub,
        },
    ),
];

/// Lookup the precedence entry for an infix token.
#[must_use]
pub fn infix_entry(kind: TokenKind) -> Option<InfixEntry> {
    INFIX_TABLE
        .iter()
        .find_map(|(k, entry)| (kind == *k).then_some(*entry))
}
