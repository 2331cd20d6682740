//! Testing utilities
//!
//!     Shared by unit tests and the integration tests under `tests/`.
//!
//!     fixtures:
//!         Tiny grammars written out as raw tables, small enough to trace by hand:
//!         `repeat` (one or more "a" then end of input), `single` (exactly one "a")
//!         and `optional` ("a" optionally followed by "b").
//!
//!     factories:
//!         Token constructors, so parser tests can feed streams without going through
//!         the tokenizer.
//!
//!     with_small_stack:
//!         Runs a closure on a thread with a 64 KiB stack, for checking that tree walks
//!         do not recurse per level.
//!
//!     cst_assertions:
//!         A fluent API for checking tree shape and content:
//!
//!             assert_cst(&tree, &grammar)
//!                 .symbol("s")
//!                 .child_count(2)
//!                 .child(0, |a| a.terminal(TokenKind::Name).text("a"))
//!                 .child(1, |end| end.terminal(TokenKind::EndMarker).no_text());

pub mod cst_assertions;
pub mod factories;
pub mod fixtures;

pub use cst_assertions::{assert_cst, NodeAssertion};

/// Run `f` on a scoped thread with a 64 KiB stack and return its result.
pub fn with_small_stack<T, F>(f: F) -> T
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    std::thread::scope(|scope| {
        let handle = std::thread::Builder::new()
            .stack_size(64 * 1024)
            .spawn_scoped(scope, f)
            .unwrap_or_else(|err| panic!("cannot spawn test thread: {err}"));
        match handle.join() {
            Ok(value) => value,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    })
}
