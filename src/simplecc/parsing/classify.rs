//! Token classification
//!
//! Maps a token to the label the automata are written in. Keywords and operators
//! share token kinds with identifiers and punctuation, so NAME and OP tokens are
//! first looked up by their exact text. Every other token, and a NAME or OP with no
//! literal label, falls back to the generic label of its kind.
//!
//! The label table is small and fixed, so both lookups are linear scans in table
//! order. The EMPTY label is never returned.

use crate::simplecc::grammar::{Grammar, LabelId, TokenKind};

pub fn classify(grammar: &Grammar, kind: TokenKind, text: &str) -> Option<LabelId> {
    if kind.has_keywords() {
        if let Some((id, _)) = grammar
            .label_entries()
            .find(|(_, label)| label.is_literal(text))
        {
            return Some(id);
        }
    }
    grammar
        .label_entries()
        .find(|(_, label)| label.is_generic(kind))
        .map(|(id, _)| id)
}
