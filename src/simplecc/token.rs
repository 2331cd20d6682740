//! Token model shared by the tokenizer and the parser

use crate::simplecc::grammar::TokenKind;
use serde::Serialize;
use std::fmt;

/// A position in source text.
///
/// Lines are 1-based, columns are 0-based byte offsets within the line. `0:0` marks
/// synthetic positions such as the root of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One token as consumed by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenInfo {
    pub kind: TokenKind,
    pub text: String,
    pub location: Location,
    /// Full text of the source line the token starts on, for diagnostics.
    pub line: String,
}

impl TokenInfo {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        location: Location,
        line: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
            line: line.into(),
        }
    }

    /// The end-of-input sentinel.
    pub fn end_marker(location: Location) -> Self {
        Self::new(TokenKind::EndMarker, "", location, "")
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.location, self.kind, self.text)
    }
}
