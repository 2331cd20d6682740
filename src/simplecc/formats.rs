//! Output formats
//!
//!     Every way of printing a parse result goes through here, so the CLI and tests
//!     share one implementation.
//!
//!     Tree formats implement [CstFormatter] and are looked up by name in a
//!     [FormatRegistry]:
//!         cst-sexp     lisp-style parse tree, one line per child of a branching node
//!         cst-treeviz  one line per node with box-drawing connectors and icons
//!         cst-json     nested JSON objects
//!         cst-dot      Graphviz digraph of record nodes
//!
//!     Token streams and grammar tables are not trees and have plain functions instead
//!     ([tokens::format_tokens], [grammar_dump::dump_grammar]).

pub mod dot;
pub mod grammar_dump;
pub mod json;
pub mod registry;
pub mod sexp;
pub mod tokens;
pub mod treeviz;

pub use dot::DotFormatter;
pub use json::JsonFormatter;
pub use registry::{CstFormatter, FormatError, FormatRegistry};
pub use sexp::SexpFormatter;
pub use treeviz::TreevizFormatter;
