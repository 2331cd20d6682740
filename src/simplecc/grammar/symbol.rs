//! Grammar symbols
//!
//! Terminals and nonterminals share one raw integer space in generated tables:
//! terminal ids are below [NT_OFFSET], nonterminal ids are at or above it. [Symbol]
//! makes the split explicit so the parser never compares raw ids against the offset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// First raw id used for nonterminals.
pub const NT_OFFSET: u16 = 256;

/// Terminal token categories.
///
/// The discriminants are the raw ids used by the grammar tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Name = 0,
    Op = 1,
    #[serde(rename = "ERRORTOKEN")]
    ErrorToken = 2,
    #[serde(rename = "ENDMARKER")]
    EndMarker = 3,
    Char = 4,
    Number = 5,
    String = 6,
}

impl TokenKind {
    pub const ALL: [TokenKind; 7] = [
        TokenKind::Name,
        TokenKind::Op,
        TokenKind::ErrorToken,
        TokenKind::EndMarker,
        TokenKind::Char,
        TokenKind::Number,
        TokenKind::String,
    ];

    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.id() == id)
    }

    /// Table name of the category (`NAME`, `OP`, ...).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Name => "NAME",
            TokenKind::Op => "OP",
            TokenKind::ErrorToken => "ERRORTOKEN",
            TokenKind::EndMarker => "ENDMARKER",
            TokenKind::Char => "CHAR",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
        }
    }

    /// Keywords and operators share these kinds with identifiers and punctuation.
    pub fn has_keywords(self) -> bool {
        matches!(self, TokenKind::Name | TokenKind::Op)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier of a nonterminal. Always holds a raw id `>= NT_OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonterminalId(u16);

impl NonterminalId {
    pub fn new(raw: u16) -> Option<Self> {
        (raw >= NT_OFFSET).then_some(Self(raw))
    }

    pub fn from_index(index: usize) -> Option<Self> {
        u16::try_from(index)
            .ok()
            .and_then(|index| index.checked_add(NT_OFFSET))
            .map(Self)
    }

    pub fn raw(self) -> u16 {
        self.0
    }

    /// Position of the nonterminal's DFA in the grammar.
    pub fn index(self) -> usize {
        usize::from(self.0 - NT_OFFSET)
    }
}

impl fmt::Display for NonterminalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A grammar symbol: terminal category or nonterminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(TokenKind),
    Nonterminal(NonterminalId),
}

impl Symbol {
    /// Resolve a raw table id. Returns `None` for ids below the offset that are not
    /// a known terminal category.
    pub fn from_raw(raw: u16) -> Option<Self> {
        match NonterminalId::new(raw) {
            Some(nt) => Some(Symbol::Nonterminal(nt)),
            None => TokenKind::from_id(raw).map(Symbol::Terminal),
        }
    }

    pub fn raw(self) -> u16 {
        match self {
            Symbol::Terminal(kind) => kind.id(),
            Symbol::Nonterminal(nt) => nt.raw(),
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    pub fn as_nonterminal(self) -> Option<NonterminalId> {
        match self {
            Symbol::Nonterminal(nt) => Some(nt),
            Symbol::Terminal(_) => None,
        }
    }
}

impl From<TokenKind> for Symbol {
    fn from(kind: TokenKind) -> Self {
        Symbol::Terminal(kind)
    }
}

impl From<NonterminalId> for Symbol {
    fn from(nt: NonterminalId) -> Self {
        Symbol::Nonterminal(nt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_ids_split_at_offset() {
        assert_eq!(Symbol::from_raw(0), Some(Symbol::Terminal(TokenKind::Name)));
        assert_eq!(
            Symbol::from_raw(6),
            Some(Symbol::Terminal(TokenKind::String))
        );
        assert_eq!(Symbol::from_raw(7), None);
        assert_eq!(Symbol::from_raw(255), None);

        let nt = Symbol::from_raw(256).and_then(Symbol::as_nonterminal);
        assert_eq!(nt.map(NonterminalId::index), Some(0));
        assert_eq!(Symbol::from_raw(300).map(Symbol::raw), Some(300));
    }

    #[test]
    fn test_token_kind_ids_round_trip() {
        for kind in TokenKind::ALL {
            assert_eq!(TokenKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(TokenKind::EndMarker.name(), "ENDMARKER");
        assert!(TokenKind::Op.has_keywords());
        assert!(!TokenKind::Number.has_keywords());
    }

    #[test]
    fn test_nonterminal_index() {
        assert_eq!(NonterminalId::new(255), None);
        assert_eq!(NonterminalId::from_index(3).map(NonterminalId::raw), Some(259));
    }
}
