//! Concrete syntax tree
//!
//!     The parser produces one [Node] per grammar symbol it recognizes: a terminal leaf
//!     per consumed token and a nonterminal per derivation, holding its children in
//!     source order. Nothing is dropped or rewritten, so the leaves of a tree are
//!     exactly the tokens that were fed.
//!
//!     Terminals carry text (except ENDMARKER, which has none) and never children.
//!     Nonterminals never carry text. Each node owns its children; the tree is freed
//!     iteratively, so deeply nested input cannot overflow the stack on drop.

use crate::simplecc::grammar::{NonterminalId, Symbol, TokenKind};
use crate::simplecc::token::Location;
use std::mem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Terminal(Terminal),
    Nonterminal(Nonterminal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    kind: TokenKind,
    text: Option<String>,
    location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonterminal {
    symbol: NonterminalId,
    location: Location,
    children: Vec<Node>,
}

impl Node {
    /// A leaf for a consumed token. The text of an ENDMARKER is discarded.
    pub fn terminal(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        let text = match kind {
            TokenKind::EndMarker => None,
            _ => Some(text.into()),
        };
        Node::Terminal(Terminal {
            kind,
            text,
            location,
        })
    }

    pub fn symbol(&self) -> Symbol {
        match self {
            Node::Terminal(t) => Symbol::Terminal(t.kind),
            Node::Nonterminal(n) => Symbol::Nonterminal(n.symbol),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Terminal(t) => t.text(),
            Node::Nonterminal(_) => None,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Node::Terminal(t) => t.location,
            Node::Nonterminal(n) => n.location,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Terminal(_) => &[],
            Node::Nonterminal(n) => &n.children,
        }
    }

    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            Node::Terminal(t) => Some(t),
            Node::Nonterminal(_) => None,
        }
    }

    pub fn as_nonterminal(&self) -> Option<&Nonterminal> {
        match self {
            Node::Nonterminal(n) => Some(n),
            Node::Terminal(_) => None,
        }
    }

    /// Terminal leaves in source order.
    pub fn leaves(&self) -> Vec<&Terminal> {
        let mut leaves = Vec::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Node::Terminal(t) => leaves.push(t),
                Node::Nonterminal(n) => pending.extend(n.children.iter().rev()),
            }
        }
        leaves
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children().iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

impl Terminal {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

impl Nonterminal {
    pub fn new(symbol: NonterminalId, location: Location) -> Self {
        Self {
            symbol,
            location,
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn symbol(&self) -> NonterminalId {
        self.symbol
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl From<Nonterminal> for Node {
    fn from(node: Nonterminal) -> Self {
        Node::Nonterminal(node)
    }
}

impl Drop for Nonterminal {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Nonterminal(mut inner) = node {
                pending.append(&mut inner.children);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nt(raw: u16) -> NonterminalId {
        NonterminalId::new(raw).expect("nonterminal id")
    }

    #[test]
    fn test_end_marker_has_no_text() {
        let end = Node::terminal(TokenKind::EndMarker, "ignored", Location::new(3, 0));
        assert_eq!(end.text(), None);
        let name = Node::terminal(TokenKind::Name, "x", Location::new(1, 4));
        assert_eq!(name.text(), Some("x"));
        assert!(name.children().is_empty());
    }

    #[test]
    fn test_leaves_and_depth() {
        let mut inner = Nonterminal::new(nt(257), Location::new(1, 2));
        inner.add_child(Node::terminal(TokenKind::Name, "b", Location::new(1, 2)));
        let mut root = Nonterminal::new(nt(256), Location::default());
        root.add_child(Node::terminal(TokenKind::Name, "a", Location::new(1, 0)));
        root.add_child(inner.into());
        root.add_child(Node::terminal(TokenKind::EndMarker, "", Location::new(1, 0)));
        let root = Node::from(root);

        let texts: Vec<_> = root.leaves().iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec![Some("a"), Some("b"), None]);
        assert_eq!(root.depth(), 3);
        assert_eq!(root.symbol(), Symbol::Nonterminal(nt(256)));
        assert!(root.as_nonterminal().is_some());
        assert!(root.children()[0].as_terminal().is_some());
    }

    #[test]
    fn test_deep_tree_drops_without_overflow() {
        let mut node = Node::terminal(TokenKind::Name, "a", Location::new(1, 0));
        for _ in 0..200_000 {
            let mut parent = Nonterminal::new(nt(256), Location::new(1, 0));
            parent.add_child(node);
            node = parent.into();
        }
        assert_eq!(node.leaves().len(), 1);
        drop(node);
    }
}
