//! Base tokenization for simplecc source
//!
//! Runs the logos lexer over a source string and pairs every lexeme with its byte
//! range. Characters logos cannot match are reported as error tokens one character
//! at a time, so the output covers every non-whitespace byte of the input.

use crate::simplecc::grammar::TokenKind;
use crate::simplecc::lexing::tokens_core::CoreToken;
use logos::Logos;
use std::ops::Range;

/// Tokenize source code with byte ranges.
pub fn tokenize(source: &str) -> Vec<(TokenKind, Range<usize>)> {
    let mut lexer = CoreToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token.kind(), span)),
            Err(()) => {
                // Widen to whole characters; a multi-byte character may be reported
                // as several single-byte errors.
                if !source.is_char_boundary(span.start) {
                    continue;
                }
                let mut end = span.end.max(span.start + 1);
                while end < source.len() && !source.is_char_boundary(end) {
                    end += 1;
                }
                tokens.push((TokenKind::ErrorToken, span.start..end));
            }
        }
    }

    tokens
}
