//! Graphviz rendering of a concrete syntax tree
//!
//! A `digraph "Concrete Syntax Tree"` with one record node per CST node and an edge
//! from every nonterminal to each of its children:
//!
//!     digraph "Concrete Syntax Tree" {
//!         label="Concrete Syntax Tree";
//!
//!         Node0 [shape=record,label="{s}"];
//!         Node0 -> Node1;
//!         Node1 [shape=record,label="{NAME|a}"];
//!     }
//!
//! The record label is the symbol name, followed by the token text for terminals.
//! Nodes are numbered in pre-order.

use super::registry::{CstFormatter, FormatError};
use crate::simplecc::cst::Node;
use crate::simplecc::grammar::Grammar;

const GRAPH_NAME: &str = "Concrete Syntax Tree";

/// Escape text for a record label.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' | '\\' | '{' | '}' | '|' | '<' | '>' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

pub fn to_dot_str(root: &Node, grammar: &Grammar) -> String {
    let mut out = format!("digraph \"{0}\" {{\n\tlabel=\"{0}\";\n\n", GRAPH_NAME);
    let mut next_id = 1;
    let mut pending = vec![(root, 0usize)];

    while let Some((node, id)) = pending.pop() {
        let name = escape(grammar.symbol_name(node.symbol()));
        match node.text() {
            Some(text) => out.push_str(&format!(
                "\tNode{} [shape=record,label=\"{{{}|{}}}\"];\n",
                id,
                name,
                escape(text)
            )),
            None => out.push_str(&format!("\tNode{} [shape=record,label=\"{{{}}}\"];\n", id, name)),
        }

        let children = node.children();
        let first_child = next_id;
        next_id += children.len();
        for offset in 0..children.len() {
            out.push_str(&format!("\tNode{} -> Node{};\n", id, first_child + offset));
        }
        for (offset, child) in children.iter().enumerate().rev() {
            pending.push((child, first_child + offset));
        }
    }

    out.push_str("}\n");
    out
}

pub struct DotFormatter;

impl CstFormatter for DotFormatter {
    fn name(&self) -> &str {
        "cst-dot"
    }

    fn format(&self, node: &Node, grammar: &Grammar) -> Result<String, FormatError> {
        Ok(to_dot_str(node, grammar))
    }

    fn description(&self) -> &str {
        "Graphviz digraph with one record node per CST node"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplecc::testing::{self, factories, fixtures};

    #[test]
    fn test_nodes_and_edges() {
        let grammar = fixtures::repeat_grammar();
        let tree = factories::parse_words(&grammar, &["a", "a", "END"]).expect("parse");
        assert_eq!(
            to_dot_str(&tree, &grammar),
            "digraph \"Concrete Syntax Tree\" {\n\
             \tlabel=\"Concrete Syntax Tree\";\n\n\
             \tNode0 [shape=record,label=\"{s}\"];\n\
             \tNode0 -> Node1;\n\
             \tNode0 -> Node2;\n\
             \tNode1 [shape=record,label=\"{NAME|a}\"];\n\
             \tNode2 [shape=record,label=\"{s}\"];\n\
             \tNode2 -> Node3;\n\
             \tNode2 -> Node4;\n\
             \tNode3 [shape=record,label=\"{NAME|a}\"];\n\
             \tNode4 [shape=record,label=\"{ENDMARKER}\"];\n\
             }\n"
        );
    }

    #[test]
    fn test_record_characters_are_escaped() {
        assert_eq!(escape("{"), "\\{");
        assert_eq!(escape("\"a|b\""), "\\\"a\\|b\\\"");
        assert_eq!(escape("<="), "\\<=");
    }

    #[test]
    fn test_deep_tree_on_small_stack() {
        let grammar = fixtures::single_grammar();
        let tree = factories::nested_chain(grammar.start(), 1_500);
        let output = testing::with_small_stack(|| to_dot_str(&tree, &grammar));
        assert_eq!(output.matches(" -> ").count(), 1_500);
        assert!(output.contains("\tNode1500 [shape=record,label=\"{NAME|a}\"];\n"));
    }
}
