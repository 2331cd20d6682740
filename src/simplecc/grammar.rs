//! Grammar model
//!
//!     The parser is a generic interpreter for LL(1) grammars expressed as one
//!     deterministic finite automaton per nonterminal. This module holds the data it
//!     interprets. Nothing here is specific to the simplecc language: the language lives
//!     entirely in the tables (see [builtin]).
//!
//! Model
//!
//!     Symbols:
//!         Either a terminal token category ([TokenKind]) or a nonterminal
//!         ([NonterminalId]). Generated tables number both in one integer space split at
//!         [NT_OFFSET]; the split is resolved into [Symbol] once, when tables are loaded.
//!
//!     Labels:
//!         A flat table mapping raw tokens to grammar categories. A label with text is a
//!         keyword or an operator, a label without text matches any token of its kind.
//!         Label 0 is the reserved EMPTY sentinel.
//!
//!     DFAs:
//!         One per nonterminal. States hold ordered arcs `(label, target)` and an
//!         accepting flag. Accepting states carry an explicit `(EMPTY, self)` arc, so an
//!         accepting state with a single arc cannot be extended by any token.
//!
//!     FIRST sets:
//!         The labels that can begin a derivation of a nonterminal, used to predict
//!         which nonterminal arc to follow with one token of lookahead.
//!
//! Loading
//!
//!     Tables come from an external grammar generator as JSON or YAML ([tables]).
//!     Construction rejects dangling references, after which the accessors can index
//!     without checks. Whether the tables really are LL(1) is a precondition that is only
//!     verified offline ([validation]).

pub mod builtin;
pub mod model;
pub mod symbol;
pub mod tables;
pub mod validation;

pub use model::{Arc, Dfa, DfaState, Grammar, Label, LabelId};
pub use symbol::{NonterminalId, Symbol, TokenKind, NT_OFFSET};
pub use tables::{GrammarError, GrammarTables};
pub use validation::GrammarIssue;
