//! Hand-written grammar tables for tests

use crate::simplecc::grammar::Grammar;

/// `s := 'a' (s | ENDMARKER)`
pub const REPEAT_GRAMMAR_JSON: &str = r#"{
  "name": "repeat",
  "start": 256,
  "nonterminal_offset": 256,
  "labels": [
    {"symbol": 0, "text": "EMPTY"},
    {"symbol": 0, "text": "a"},
    {"symbol": 256, "text": null},
    {"symbol": 3, "text": null}
  ],
  "dfas": [
    {"symbol": 256, "name": "s", "first": [1], "states": [
      {"arcs": [[1, 1]], "accepting": false},
      {"arcs": [[2, 2], [3, 2]], "accepting": false},
      {"arcs": [[0, 2]], "accepting": true}
    ]}
  ]
}"#;

/// `s := 'a'`
pub const SINGLE_GRAMMAR_JSON: &str = r#"{
  "name": "single",
  "start": 256,
  "nonterminal_offset": 256,
  "labels": [
    {"symbol": 0, "text": "EMPTY"},
    {"symbol": 0, "text": "a"}
  ],
  "dfas": [
    {"symbol": 256, "name": "s", "first": [1], "states": [
      {"arcs": [[1, 1]], "accepting": false},
      {"arcs": [[0, 1]], "accepting": true}
    ]}
  ]
}"#;

/// `s := 'a' ['b']`
pub const OPTIONAL_GRAMMAR_JSON: &str = r#"{
  "name": "optional",
  "start": 256,
  "nonterminal_offset": 256,
  "labels": [
    {"symbol": 0, "text": "EMPTY"},
    {"symbol": 0, "text": "a"},
    {"symbol": 0, "text": "b"},
    {"symbol": 3, "text": null}
  ],
  "dfas": [
    {"symbol": 256, "name": "s", "first": [1], "states": [
      {"arcs": [[1, 1]], "accepting": false},
      {"arcs": [[2, 2], [0, 1]], "accepting": true},
      {"arcs": [[0, 2]], "accepting": true}
    ]}
  ]
}"#;

fn load(json: &str) -> Grammar {
    Grammar::from_json(json).unwrap_or_else(|err| panic!("fixture grammar: {err}"))
}

pub fn repeat_grammar() -> Grammar {
    load(REPEAT_GRAMMAR_JSON)
}

pub fn single_grammar() -> Grammar {
    load(SINGLE_GRAMMAR_JSON)
}

pub fn optional_grammar() -> Grammar {
    load(OPTIONAL_GRAMMAR_JSON)
}
