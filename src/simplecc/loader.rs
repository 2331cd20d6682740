//! Source loading utilities
//!
//! `SourceLoader` reads simplecc source from a file or a string and runs the front end
//! on it. It is used by the CLI and by tests.
//!
//! ```rust
//! use simplecc::simplecc::loader::SourceLoader;
//!
//! let tree = SourceLoader::from_string("void main() { }").parse()?;
//! let tokens = SourceLoader::from_path("prog.c")?.tokenize();
//! ```

use crate::simplecc::cst::Node;
use crate::simplecc::grammar::{builtin, Grammar, GrammarError};
use crate::simplecc::lexing;
use crate::simplecc::parsing::{self, ParseError};
use crate::simplecc::token::TokenInfo;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Grammar(#[from] &'static GrammarError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl LoaderError {
    /// The syntax error, when loading failed on the input itself.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            LoaderError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(SourceLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokenize(&self) -> Vec<TokenInfo> {
        lexing::tokenize(&self.source)
    }

    /// Parse with the built-in simplecc grammar.
    pub fn parse(&self) -> Result<Node, LoaderError> {
        let grammar = builtin::load()?;
        self.parse_with(grammar)
    }

    pub fn parse_with(&self, grammar: &Grammar) -> Result<Node, LoaderError> {
        let tokens = self.tokenize();
        Ok(parsing::parse_tokens(grammar, &tokens)?)
    }
}
