//! Lisp-style parse tree
//!
//! Every node prints as `(name ...)`:
//!
//!     (NAME: main)          terminal with its text
//!     (OP: '(')             operator text is quoted so it cannot be read as a paren
//!     (ENDMARKER)           end of input has no text
//!     (stmt: (...))         a nonterminal with one child keeps it on the same line
//!     (term:                otherwise each child goes on its own line, two spaces
//!       (factor: ...),      deeper than the parent's children, separated by commas
//!       (OP: '*'),
//!       (factor: ...))

use super::registry::{CstFormatter, FormatError};
use crate::simplecc::cst::Node;
use crate::simplecc::grammar::{Grammar, TokenKind};

enum Item<'a> {
    Node(&'a Node, usize),
    Text(&'static str),
    Indent(usize),
}

/// Render `node` as an s-expression. Uses an explicit work stack, so tree depth is
/// bounded by memory only.
pub fn to_sexp_str(node: &Node, grammar: &Grammar) -> String {
    let mut out = String::new();
    let mut work = vec![Item::Node(node, 0)];
    while let Some(item) = work.pop() {
        match item {
            Item::Text(text) => out.push_str(text),
            Item::Indent(level) => out.push_str(&"  ".repeat(level)),
            Item::Node(node, level) => open_node(&mut out, &mut work, node, grammar, level),
        }
    }
    out
}

fn open_node<'a>(
    out: &mut String,
    work: &mut Vec<Item<'a>>,
    node: &'a Node,
    grammar: &Grammar,
    level: usize,
) {
    out.push('(');
    out.push_str(grammar.symbol_name(node.symbol()));
    match node {
        Node::Terminal(terminal) => {
            match (terminal.kind(), terminal.text()) {
                (TokenKind::EndMarker, _) | (_, None) => {}
                (TokenKind::Op, Some(text)) => {
                    out.push_str(": '");
                    out.push_str(text);
                    out.push('\'');
                }
                (_, Some(text)) => {
                    out.push_str(": ");
                    out.push_str(text);
                }
            }
            out.push(')');
        }
        Node::Nonterminal(nonterminal) => match nonterminal.children() {
            [] => out.push(')'),
            [only] => {
                out.push_str(": ");
                work.push(Item::Text(")"));
                work.push(Item::Node(only, level));
            }
            children => {
                out.push_str(":\n");
                work.push(Item::Text(")"));
                for (i, child) in children.iter().enumerate().rev() {
                    work.push(Item::Node(child, level + 1));
                    work.push(Item::Indent(level + 1));
                    if i > 0 {
                        work.push(Item::Text(",\n"));
                    }
                }
            }
        },
    }
}

pub struct SexpFormatter;

impl CstFormatter for SexpFormatter {
    fn name(&self) -> &str {
        "cst-sexp"
    }

    fn format(&self, node: &Node, grammar: &Grammar) -> Result<String, FormatError> {
        Ok(to_sexp_str(node, grammar))
    }

    fn description(&self) -> &str {
        "Lisp-style parse tree, one line per child of a branching node"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplecc::testing::{self, factories, fixtures};

    #[test]
    fn test_single_child_stays_inline() {
        let grammar = fixtures::single_grammar();
        let tree = factories::parse_words(&grammar, &["a"]).expect("parse");
        assert_eq!(to_sexp_str(&tree, &grammar), "(s: (NAME: a))");
    }

    #[test]
    fn test_nested_children_are_indented() {
        let grammar = fixtures::repeat_grammar();
        let tree = factories::parse_words(&grammar, &["a", "a", "END"]).expect("parse");
        assert_eq!(
            to_sexp_str(&tree, &grammar),
            "(s:\n  (NAME: a),\n  (s:\n    (NAME: a),\n    (ENDMARKER)))"
        );
    }

    #[test]
    fn test_deep_tree_on_small_stack() {
        let grammar = fixtures::single_grammar();
        let tree = factories::nested_chain(grammar.start(), 1_500);
        let output = testing::with_small_stack(|| to_sexp_str(&tree, &grammar));
        assert!(output.starts_with("(s: (s: (s: "));
        assert!(output.ends_with(&format!("(NAME: a){}", ")".repeat(1_500))));
    }
}
