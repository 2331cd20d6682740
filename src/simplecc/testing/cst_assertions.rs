//! Fluent assertion API for concrete syntax trees
//!
//!     Tests describe the expected tree top-down instead of walking [Node] values by
//!     hand. Every failure message carries the path from the root (`program/0/2`), so a
//!     failing check on a deep tree still points at the node.

use crate::simplecc::cst::Node;
use crate::simplecc::grammar::{Grammar, TokenKind};
use crate::simplecc::token::Location;

/// Start asserting on `node`; names are resolved through `grammar`.
pub fn assert_cst<'a>(node: &'a Node, grammar: &'a Grammar) -> NodeAssertion<'a> {
    NodeAssertion {
        node,
        grammar,
        context: grammar.symbol_name(node.symbol()).to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    grammar: &'a Grammar,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// The grammar or token-kind name of the node.
    pub fn symbol(self, expected: &str) -> Self {
        let actual = self.grammar.symbol_name(self.node.symbol());
        assert_eq!(
            actual, expected,
            "{}: Expected symbol '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn terminal(self, kind: TokenKind) -> Self {
        let actual = self.node.as_terminal().map(|t| t.kind());
        assert_eq!(
            actual,
            Some(kind),
            "{}: Expected a {} terminal",
            self.context,
            kind
        );
        self
    }

    pub fn nonterminal(self) -> Self {
        assert!(
            self.node.as_nonterminal().is_some(),
            "{}: Expected a nonterminal, found a terminal",
            self.context
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.text(),
            Some(expected),
            "{}: Expected text '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn no_text(self) -> Self {
        assert_eq!(
            self.node.text(),
            None,
            "{}: Expected no text",
            self.context
        );
        self
    }

    pub fn location(self, line: usize, column: usize) -> Self {
        assert_eq!(
            self.node.location(),
            Location::new(line, column),
            "{}: Unexpected location",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} children, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn child<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> R,
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(NodeAssertion {
            node: &children[index],
            grammar: self.grammar,
            context: format!("{}/{}", self.context, index),
        });
        self
    }

    /// Symbol names of the direct children, in order.
    pub fn child_symbols(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .node
            .children()
            .iter()
            .map(|child| self.grammar.symbol_name(child.symbol()))
            .collect();
        assert_eq!(actual, expected, "{}: Unexpected children", self.context);
        self
    }

    /// Texts of all leaves in order, ENDMARKER as an empty string.
    pub fn leaf_texts(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .node
            .leaves()
            .iter()
            .map(|leaf| leaf.text().unwrap_or(""))
            .collect();
        assert_eq!(actual, expected, "{}: Unexpected leaves", self.context);
        self
    }

    pub fn depth(self, expected: usize) -> Self {
        let actual = self.node.depth();
        assert_eq!(
            actual, expected,
            "{}: Expected depth {}, found {}",
            self.context, expected, actual
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplecc::testing::{factories, fixtures};

    #[test]
    fn test_fluent_chain() {
        let grammar = fixtures::repeat_grammar();
        let tree = factories::parse_words(&grammar, &["a", "a", "END"]).expect("parse");
        assert_cst(&tree, &grammar)
            .symbol("s")
            .nonterminal()
            .location(0, 0)
            .child_symbols(&["NAME", "s"])
            .leaf_texts(&["a", "a", ""])
            .depth(3)
            .child(1, |inner| {
                inner
                    .location(1, 2)
                    .child(0, |a| a.terminal(TokenKind::Name).text("a"))
                    .child(1, |end| end.terminal(TokenKind::EndMarker).no_text())
            });
    }

    #[test]
    #[should_panic(expected = "s/1: Expected 3 children, found 2")]
    fn test_failure_reports_path() {
        let grammar = fixtures::repeat_grammar();
        let tree = factories::parse_words(&grammar, &["a", "a", "END"]).expect("parse");
        assert_cst(&tree, &grammar).child(1, |inner| inner.child_count(3));
    }
}
