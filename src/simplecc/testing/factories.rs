//! Token factories

use crate::simplecc::cst::{Node, Nonterminal};
use crate::simplecc::grammar::{Grammar, NonterminalId, TokenKind};
use crate::simplecc::parsing::{parse_tokens, ParseError};
use crate::simplecc::token::{Location, TokenInfo};

pub fn token(kind: TokenKind, text: &str, line: usize, column: usize) -> TokenInfo {
    TokenInfo::new(kind, text, Location::new(line, column), text)
}

pub fn name(text: &str, line: usize, column: usize) -> TokenInfo {
    token(TokenKind::Name, text, line, column)
}

pub fn op(text: &str, line: usize, column: usize) -> TokenInfo {
    token(TokenKind::Op, text, line, column)
}

/// The end-of-input sentinel at column 0 of `line`.
pub fn end(line: usize) -> TokenInfo {
    TokenInfo::end_marker(Location::new(line, 0))
}

/// Space separated NAME tokens on line 1; the word `END` stands for ENDMARKER.
pub fn words(words: &[&str]) -> Vec<TokenInfo> {
    let line = words
        .iter()
        .filter(|word| **word != "END")
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let mut column = 0;
    words
        .iter()
        .map(|&word| {
            if word == "END" {
                return end(1);
            }
            let token = TokenInfo::new(TokenKind::Name, word, Location::new(1, column), line.clone());
            column += word.len() + 1;
            token
        })
        .collect()
}

pub fn parse_words(grammar: &Grammar, input: &[&str]) -> Result<Node, ParseError> {
    parse_tokens(grammar, &words(input))
}

/// `depth` nonterminals of `symbol`, each the only child of the one above, around a
/// single NAME leaf `a`.
pub fn nested_chain(symbol: NonterminalId, depth: usize) -> Node {
    let mut node = Node::terminal(TokenKind::Name, "a", Location::new(1, 0));
    for _ in 0..depth {
        let mut parent = Nonterminal::new(symbol, Location::default());
        parent.add_child(node);
        node = parent.into();
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        let tokens = words(&["a", "bb", "c", "END"]);
        assert_eq!(tokens[1].location, Location::new(1, 2));
        assert_eq!(tokens[2].location, Location::new(1, 5));
        assert_eq!(tokens[2].line, "a bb c");
        assert_eq!(tokens[3], end(1));
    }

    #[test]
    fn test_nested_chain() {
        let grammar = crate::simplecc::testing::fixtures::single_grammar();
        let tree = nested_chain(grammar.start(), 3);
        assert_eq!(tree.depth(), 4);
        assert_eq!(tree.leaves().len(), 1);
    }
}
