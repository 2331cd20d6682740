//! # simplecc
//!
//! Front end for the simplecc teaching language: a small C-like language with
//! constants, scalar and array variables, functions, `if`/`while`/`for`,
//! `scanf`/`printf` and `return`.
//!
//! File Layout
//!
//! The crate is organized around the parsing pipeline:
//! src/simplecc
//!   ├── grammar      Grammar model: symbols, labels, per-nonterminal DFAs, table loading
//!   ├── lexing       Source text to tokens (logos based)
//!   ├── parsing      The table-driven pushdown automaton that builds the CST
//!   ├── cst          Concrete syntax tree nodes
//!   ├── formats      CST/token/grammar serializers
//!   └── <support>    diagnostics, config, loader, testing
//!
//! The parser never hardcodes the language: everything it knows comes from the grammar
//! tables, which are generated offline and shipped as data (see `grammars/`).
//!
//! For testing guidelines, see the [testing module](simplecc::testing).

pub mod simplecc;
