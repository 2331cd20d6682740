//! Parse errors
//!
//! The parser stops at the first error. Each error keeps the offending token's
//! location, text and source line so it can be reported without the token stream.

use crate::simplecc::grammar::TokenKind;
use crate::simplecc::token::{Location, TokenInfo};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParseErrorKind {
    /// The token matches no label of the grammar.
    LexicalMismatch,
    /// The token is known but not allowed at this point.
    UnexpectedToken,
    /// The start symbol was complete before the input ended.
    ExcessInput,
    /// The input ended before the start symbol was complete.
    IncompleteInput,
}

impl ParseErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseErrorKind::LexicalMismatch => "LexicalMismatch",
            ParseErrorKind::UnexpectedToken => "UnexpectedToken",
            ParseErrorKind::ExcessInput => "ExcessInput",
            ParseErrorKind::IncompleteInput => "IncompleteInput",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message} at {location}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: Location,
    /// Text of the offending token, empty for end of input.
    pub text: String,
    /// Source line of the offending token.
    pub line: String,
    pub message: String,
}

impl ParseError {
    fn at(kind: ParseErrorKind, token: &TokenInfo, message: String) -> Self {
        Self {
            kind,
            location: token.location,
            text: token.text.clone(),
            line: token.line.clone(),
            message,
        }
    }

    pub fn lexical_mismatch(token: &TokenInfo) -> Self {
        let message = match token.kind {
            TokenKind::ErrorToken => format!("error token '{}'", token.text),
            _ => format!("unexpected token '{}'", token.text),
        };
        Self::at(ParseErrorKind::LexicalMismatch, token, message)
    }

    pub fn unexpected_token(token: &TokenInfo) -> Self {
        let message = match token.kind {
            TokenKind::EndMarker => "unexpected end of input".to_string(),
            _ => format!("unexpected '{}'", token.text),
        };
        Self::at(ParseErrorKind::UnexpectedToken, token, message)
    }

    pub fn excess_input(token: &TokenInfo) -> Self {
        Self::at(ParseErrorKind::ExcessInput, token, "too much input".to_string())
    }

    /// Input ran out; located at the last token seen, if any.
    pub fn incomplete_input(last: Option<&TokenInfo>) -> Self {
        let message = "incomplete input".to_string();
        match last {
            Some(token) => Self::at(ParseErrorKind::IncompleteInput, token, message),
            None => Self {
                kind: ParseErrorKind::IncompleteInput,
                location: Location::default(),
                text: String::new(),
                line: String::new(),
                message,
            },
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
