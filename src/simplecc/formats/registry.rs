//! Format registry for CST serialization
//!
//! Each format implements [CstFormatter] and can be registered with [FormatRegistry].

use crate::simplecc::cst::Node;
use crate::simplecc::grammar::Grammar;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}

/// A way to print a concrete syntax tree. Symbol names come from the grammar that
/// produced the tree.
pub trait CstFormatter: Send + Sync {
    /// The name of this format (e.g., "cst-sexp")
    fn name(&self) -> &str;

    fn format(&self, node: &Node, grammar: &Grammar) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn CstFormatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any with the same name.
    pub fn register<F: CstFormatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn CstFormatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn format(&self, node: &Node, grammar: &Grammar, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.format(node, grammar)
    }

    /// Registered names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// `(name, description)` pairs, sorted by name.
    pub fn describe_formats(&self) -> Vec<(String, String)> {
        self.list_formats()
            .into_iter()
            .map(|name| {
                let description = self
                    .get(&name)
                    .map(|f| f.description().to_string())
                    .unwrap_or_default();
                (name, description)
            })
            .collect()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::SexpFormatter);
        registry.register(super::TreevizFormatter::default());
        registry.register(super::JsonFormatter);
        registry.register(super::DotFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
