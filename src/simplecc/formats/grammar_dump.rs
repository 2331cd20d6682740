//! Human readable dump of grammar tables
//!
//! Lists every DFA with its FIRST set and, per state, the arcs by label name:
//!
//!     s  (first: 'a')
//!       0      'a' -> 1
//!       1      s -> 2 | ENDMARKER -> 2
//!       2  *

use crate::simplecc::grammar::{Grammar, LabelId};

pub fn dump_grammar(grammar: &Grammar) -> String {
    let mut out = format!(
        "grammar {} (start: {}, {} nonterminals, {} labels)\n",
        grammar.name(),
        grammar.start_dfa().name(),
        grammar.dfas().len(),
        grammar.labels().len()
    );
    for dfa in grammar.dfas() {
        let first: Vec<String> = dfa
            .first()
            .iter()
            .map(|&label| grammar.describe_label(label))
            .collect();
        out.push_str(&format!("\n{}  (first: {})\n", dfa.name(), first.join(" ")));
        for (index, state) in dfa.states().iter().enumerate() {
            let arcs: Vec<String> = state
                .arcs()
                .iter()
                .filter(|arc| arc.label != LabelId::EMPTY)
                .map(|arc| format!("{} -> {}", grammar.describe_label(arc.label), arc.target))
                .collect();
            let line = format!(
                "  {:<3}{:<4}{}",
                index,
                if state.is_accepting() { "*" } else { "" },
                arcs.join(" | ")
            );
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}
