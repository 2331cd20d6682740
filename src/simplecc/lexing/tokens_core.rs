//! Core token definitions for the simplecc language
//!
//! The logos enum recognizes every lexeme the language has, plus the malformed
//! literals that must surface as a single error token instead of being split apart.
//! Whitespace separates tokens and is skipped.
use crate::simplecc::grammar::TokenKind;
use logos::Logos;

/// Raw lexemes produced by logos.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
pub enum CoreToken {
    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"'[+\-*/_a-zA-Z0-9]'")]
    Char,

    #[regex(r#""[ !#-~]*""#)]
    String,

    #[regex(r"[_a-zA-Z][_a-zA-Z0-9]*")]
    Name,

    // Punctuation, arithmetic and comparison operators
    #[regex(r"[\[\](){};:,+\-*/]")]
    #[regex(r"[<>=]=?")]
    #[token("!=")]
    Op,

    // Malformed input that still consumes a recognizable prefix
    #[regex(r#""[ !#-~]*"#)]
    UnterminatedString,
    #[regex(r"'[+\-*/_a-zA-Z0-9]?")]
    UnterminatedChar,
    #[token("!")]
    Bang,
}

impl CoreToken {
    /// Grammar category of the lexeme.
    pub fn kind(self) -> TokenKind {
        match self {
            CoreToken::Number => TokenKind::Number,
            CoreToken::Char => TokenKind::Char,
            CoreToken::String => TokenKind::String,
            CoreToken::Name => TokenKind::Name,
            CoreToken::Op => TokenKind::Op,
            CoreToken::UnterminatedString | CoreToken::UnterminatedChar | CoreToken::Bang => {
                TokenKind::ErrorToken
            }
        }
    }

    pub fn is_error(self) -> bool {
        self.kind() == TokenKind::ErrorToken
    }
}
