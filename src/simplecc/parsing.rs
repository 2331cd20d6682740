//! Parser
//!
//!     A generic LL(1) parser: all language knowledge comes from a [Grammar] of one DFA
//!     per nonterminal, so the same engine runs the builtin language and any other
//!     table set. Input is a token stream ending with ENDMARKER, output is a concrete
//!     syntax tree ([Node]) or the first [ParseError].
//!
//!     The grammar is borrowed, never owned or mutated, so any number of parsers can
//!     share one grammar across threads. A [Parser] itself is single use: build one per
//!     input and drop it to abandon a parse.
//!
//! Usage
//!
//!     One shot:
//!
//!         let tokens = lexing::tokenize(source);
//!         let tree = parsing::parse_tokens(builtin::grammar(), &tokens)?;
//!
//!     Incremental:
//!
//!         let mut parser = Parser::new(grammar);
//!         for token in &tokens {
//!             if parser.feed(token)? == Step::Done { break; }
//!         }
//!         let tree = parser.take_root();
//!
//! [Grammar]: crate::simplecc::grammar::Grammar
//! [Node]: crate::simplecc::cst::Node

pub mod classify;
pub mod engine;
pub mod error;

pub use classify::classify;
pub use engine::{parse_tokens, Parser, Step};
pub use error::{ParseError, ParseErrorKind};
