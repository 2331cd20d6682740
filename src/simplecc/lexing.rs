//! Lexer
//!
//! Turns source text into the token stream the parser consumes.
//!
//! Pipeline:
//!     1. Core tokenization with logos ([base_tokenization]), yielding token kinds with
//!        byte ranges. Malformed literals and unknown characters become error tokens.
//!     2. Conversion to [TokenInfo] ([tokenize]): identifiers and keywords are
//!        lower-cased since the language is case-insensitive, byte offsets become
//!        line/column locations ([source_location]) and each token keeps the text of
//!        its source line for diagnostics.
//!     3. An ENDMARKER token is appended at column 0 of the last line.
//!
//!     Error tokens are not dropped here. The parser rejects them with a precise
//!     location, which keeps the lexer free of error reporting.

pub mod base_tokenization;
pub mod source_location;
pub mod tokens_core;

pub use source_location::SourceLocation;
pub use tokens_core::CoreToken;

use crate::simplecc::grammar::TokenKind;
use crate::simplecc::token::{Location, TokenInfo};

/// Tokenize `source` into parser input, ending with ENDMARKER.
pub fn tokenize(source: &str) -> Vec<TokenInfo> {
    let locations = SourceLocation::new(source);
    let mut tokens: Vec<TokenInfo> = base_tokenization::tokenize(source)
        .into_iter()
        .map(|(kind, range)| {
            let raw = &source[range.clone()];
            let text = match kind {
                TokenKind::Name => raw.to_ascii_lowercase(),
                _ => raw.to_string(),
            };
            let location = locations.byte_to_location(range.start);
            let line = locations.line_text(location.line).unwrap_or_default();
            TokenInfo::new(kind, text, location, line)
        })
        .collect();

    tokens.push(TokenInfo::end_marker(Location::new(locations.line_count(), 0)));
    log::debug!("tokenized {} tokens", tokens.len());
    tokens
}
