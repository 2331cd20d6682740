//! Compiled-in grammar of the simplecc teaching language
//!
//! The tables are generated offline and embedded in the binary. They are decoded on
//! first use and shared read-only afterwards.

use super::model::Grammar;
use super::tables::GrammarError;
use once_cell::sync::Lazy;

/// Raw JSON tables, as produced by the grammar generator.
pub const SIMPLECC_TABLES: &str = include_str!("../../../grammars/simplecc.json");

static BUILTIN: Lazy<Result<Grammar, GrammarError>> =
    Lazy::new(|| Grammar::from_json(SIMPLECC_TABLES));

/// The built-in grammar, or the error decoding the embedded tables.
pub fn load() -> Result<&'static Grammar, &'static GrammarError> {
    BUILTIN.as_ref()
}

/// The built-in grammar.
///
/// The embedded tables are checked by the test suite, so decoding failing here is a
/// build defect rather than a runtime condition.
pub fn grammar() -> &'static Grammar {
    match load() {
        Ok(grammar) => grammar,
        Err(err) => panic!("embedded simplecc grammar tables are invalid: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplecc::grammar::{Symbol, TokenKind};

    #[test]
    fn test_embedded_tables_load() {
        let grammar = load().expect("embedded tables");
        assert_eq!(grammar.name(), "simplecc");
        assert_eq!(grammar.dfas().len(), 27);
        assert_eq!(grammar.labels().len(), 63);
        assert_eq!(grammar.start_dfa().name(), "program");
    }

    #[test]
    fn test_keywords_and_generic_labels_present() {
        let grammar = grammar();
        let has_literal = |text: &str| grammar.label_entries().any(|(_, l)| l.is_literal(text));
        for keyword in ["const", "int", "char", "void", "main", "if", "while", "for"] {
            assert!(has_literal(keyword), "missing keyword label {keyword}");
        }
        for kind in [TokenKind::Name, TokenKind::Number, TokenKind::Char, TokenKind::String] {
            assert!(
                grammar.label_entries().any(|(_, l)| l.is_generic(kind)),
                "missing generic label for {kind}"
            );
        }
        assert!(grammar
            .label_entries()
            .any(|(_, l)| l.symbol() == Symbol::Terminal(TokenKind::EndMarker)));
    }

    #[test]
    fn test_builtin_is_well_formed() {
        assert_eq!(grammar().check_well_formed(), vec![]);
    }
}
