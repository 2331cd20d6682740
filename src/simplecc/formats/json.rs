//! JSON rendering of a concrete syntax tree
//!
//! Terminals become `{"symbol", "text", "location"}` (ENDMARKER without `text`),
//! nonterminals `{"symbol", "location", "children"}`. Output is pretty-printed with
//! two-space indentation.
//!
//! The document is written directly from an explicit work stack instead of being
//! built as a `serde_json::Value`, whose serialization and drop both recurse per
//! nesting level. serde_json is still used to escape strings.

use super::registry::{CstFormatter, FormatError};
use crate::simplecc::cst::Node;
use crate::simplecc::grammar::Grammar;

enum Item<'a> {
    Node(&'a Node, usize),
    Text(&'static str),
    Indent(usize),
    /// Newline, indentation, then the closing bracket.
    Close(usize, &'static str),
}

fn indent(out: &mut String, level: usize) {
    out.push_str(&"  ".repeat(level));
}

pub fn to_json_string(node: &Node, grammar: &Grammar) -> Result<String, FormatError> {
    let mut out = String::new();
    let mut work = vec![Item::Node(node, 0)];
    while let Some(item) = work.pop() {
        match item {
            Item::Text(text) => out.push_str(text),
            Item::Indent(level) => indent(&mut out, level),
            Item::Close(level, bracket) => {
                out.push('\n');
                indent(&mut out, level);
                out.push_str(bracket);
            }
            Item::Node(node, level) => {
                out.push_str("{\n");
                indent(&mut out, level + 1);
                out.push_str("\"symbol\": ");
                out.push_str(&serde_json::to_string(grammar.symbol_name(node.symbol()))?);
                if let Some(text) = node.text() {
                    out.push_str(",\n");
                    indent(&mut out, level + 1);
                    out.push_str("\"text\": ");
                    out.push_str(&serde_json::to_string(text)?);
                }
                let location = node.location();
                out.push_str(",\n");
                indent(&mut out, level + 1);
                out.push_str("\"location\": {\n");
                indent(&mut out, level + 2);
                out.push_str(&format!("\"line\": {},\n", location.line));
                indent(&mut out, level + 2);
                out.push_str(&format!("\"column\": {}\n", location.column));
                indent(&mut out, level + 1);
                out.push('}');

                work.push(Item::Close(level, "}"));
                if node.as_nonterminal().is_none() {
                    continue;
                }
                out.push_str(",\n");
                indent(&mut out, level + 1);
                out.push_str("\"children\": [");
                let children = node.children();
                if children.is_empty() {
                    out.push(']');
                    continue;
                }
                work.push(Item::Close(level + 1, "]"));
                for (i, child) in children.iter().enumerate().rev() {
                    work.push(Item::Node(child, level + 2));
                    work.push(Item::Indent(level + 2));
                    work.push(Item::Text(if i > 0 { ",\n" } else { "\n" }));
                }
            }
        }
    }
    Ok(out)
}

pub struct JsonFormatter;

impl CstFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "cst-json"
    }

    fn format(&self, node: &Node, grammar: &Grammar) -> Result<String, FormatError> {
        to_json_string(node, grammar)
    }

    fn description(&self) -> &str {
        "Nested JSON objects with symbol, text, location and children"
    }
}
