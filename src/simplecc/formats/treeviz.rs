//! Treeviz formatter for concrete syntax trees
//!
//! One line per node, nesting drawn with box connectors:
//!
//!     <linum?><prefix><connector> <icon> <label>
//!
//! Example:
//!
//!     ⧉ program
//!     ├─ ▸ const_decl
//!     │ ├─ ◦ NAME const
//!     │ ...
//!     └─ ∎ ENDMARKER
//!
//! Icons
//!     Nonterminals:
//!         Root: ⧉
//!         Other: ▸
//!     Terminals:
//!         NAME: ◦
//!         OP: ±
//!         NUMBER: #
//!         CHAR: '
//!         STRING: "
//!         ENDMARKER: ∎
//!         ERRORTOKEN: ✗

use super::registry::{CstFormatter, FormatError};
use crate::simplecc::cst::Node;
use crate::simplecc::grammar::{Grammar, TokenKind};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node: &Node) -> &'static str {
    match node.as_terminal().map(|t| t.kind()) {
        None => "▸",
        Some(TokenKind::Name) => "◦",
        Some(TokenKind::Op) => "±",
        Some(TokenKind::Number) => "#",
        Some(TokenKind::Char) => "'",
        Some(TokenKind::String) => "\"",
        Some(TokenKind::EndMarker) => "∎",
        Some(TokenKind::ErrorToken) => "✗",
    }
}

fn label(node: &Node, grammar: &Grammar) -> String {
    let name = grammar.symbol_name(node.symbol());
    match node.text() {
        Some(text) => format!("{} {}", name, text),
        None => name.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreevizFormatter {
    pub show_line_numbers: bool,
    pub max_label_chars: usize,
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self {
            show_line_numbers: false,
            max_label_chars: 30,
        }
    }
}

impl TreevizFormatter {
    pub fn new(show_line_numbers: bool, max_label_chars: usize) -> Self {
        Self {
            show_line_numbers,
            max_label_chars,
        }
    }

    pub fn to_treeviz_str(&self, root: &Node, grammar: &Grammar) -> String {
        let mut output = String::new();
        self.push_linum(&mut output, root);
        output.push_str(&format!(
            "⧉ {}\n",
            truncate(&label(root, grammar), self.max_label_chars)
        ));
        self.append_children(&mut output, root, grammar);
        output
    }

    fn push_linum(&self, output: &mut String, node: &Node) {
        if self.show_line_numbers {
            output.push_str(&format!("{:02} ", node.location().line));
        }
    }

    /// Depth-first walk with an explicit stack. All pending entries share one prefix
    /// buffer: each records the prefix length its line is drawn with.
    fn append_children(&self, output: &mut String, root: &Node, grammar: &Grammar) {
        let mut prefix = String::new();
        let mut pending: Vec<(&Node, usize, bool)> = Vec::new();
        push_children(&mut pending, root, 0);

        while let Some((node, prefix_len, is_last)) = pending.pop() {
            prefix.truncate(prefix_len);
            self.push_linum(output, node);
            output.push_str(&format!(
                "{}{} {} {}\n",
                prefix,
                if is_last { "└─" } else { "├─" },
                get_icon(node),
                truncate(&label(node, grammar), self.max_label_chars)
            ));
            prefix.push_str(if is_last { "  " } else { "│ " });
            push_children(&mut pending, node, prefix.len());
        }
    }
}

fn push_children<'a>(pending: &mut Vec<(&'a Node, usize, bool)>, node: &'a Node, prefix_len: usize) {
    let children = node.children();
    for (i, child) in children.iter().enumerate().rev() {
        pending.push((child, prefix_len, i == children.len() - 1));
    }
}

impl CstFormatter for TreevizFormatter {
    fn name(&self) -> &str {
        "cst-treeviz"
    }

    fn format(&self, node: &Node, grammar: &Grammar) -> Result<String, FormatError> {
        Ok(self.to_treeviz_str(node, grammar))
    }

    fn description(&self) -> &str {
        "One line per node with box-drawing connectors and icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplecc::cst::Nonterminal;
    use crate::simplecc::testing::{self, factories, fixtures};
    use crate::simplecc::token::Location;

    #[test]
    fn test_connectors_and_icons() {
        let grammar = fixtures::repeat_grammar();
        let tree = factories::parse_words(&grammar, &["a", "a", "END"]).expect("parse");
        let output = TreevizFormatter::default().to_treeviz_str(&tree, &grammar);
        assert_eq!(
            output,
            "⧉ s\n├─ ◦ NAME a\n└─ ▸ s\n  ├─ ◦ NAME a\n  └─ ∎ ENDMARKER\n"
        );
    }

    #[test]
    fn test_line_numbers_and_truncation() {
        let grammar = fixtures::single_grammar();
        let tree = factories::parse_words(&grammar, &["a"]).expect("parse");
        let output = TreevizFormatter::new(true, 4).to_treeviz_str(&tree, &grammar);
        assert_eq!(output, "00 ⧉ s\n01 └─ ◦ NAME...\n");
    }

    #[test]
    fn test_sibling_branches_keep_their_rails() {
        let grammar = fixtures::repeat_grammar();
        let inner = factories::parse_words(&grammar, &["a", "END"]).expect("parse");
        let mut root = Nonterminal::new(grammar.start(), Location::default());
        root.add_child(inner.clone());
        root.add_child(inner);
        let output = TreevizFormatter::default().to_treeviz_str(&root.into(), &grammar);
        assert_eq!(
            output,
            "⧉ s\n├─ ▸ s\n│ ├─ ◦ NAME a\n│ └─ ∎ ENDMARKER\n└─ ▸ s\n  ├─ ◦ NAME a\n  └─ ∎ ENDMARKER\n"
        );
    }

    #[test]
    fn test_deep_tree_on_small_stack() {
        let grammar = fixtures::single_grammar();
        let tree = factories::nested_chain(grammar.start(), 1_500);
        let output = testing::with_small_stack(|| {
            TreevizFormatter::default().to_treeviz_str(&tree, &grammar)
        });
        assert_eq!(output.lines().count(), 1_501);
        assert!(output.ends_with(&format!("{}└─ ◦ NAME a\n", "  ".repeat(1_499))));
    }
}
