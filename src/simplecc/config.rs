//! Configuration loading
//!
//! `defaults/simplecc.default.toml` is embedded so the documented defaults and the
//! runtime behavior stay in sync. Applications layer user files and single-key
//! overrides on top of it with [Loader] before deserializing into [SimpleccConfig].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/simplecc.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct SimpleccConfig {
    pub output: OutputConfig,
    pub treeviz: TreevizConfig,
    pub diagnostics: DiagnosticsConfig,
    #[serde(default)]
    pub grammar: GrammarConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered tree format.
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub show_line_numbers: bool,
    pub max_label_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    pub error_type: String,
    pub context_lines: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrammarConfig {
    /// Tables to use instead of the built-in grammar.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Layers user configuration over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file, ignored if absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<SimpleccConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<SimpleccConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.format, "cst-sexp");
        assert!(!config.treeviz.show_line_numbers);
        assert_eq!(config.treeviz.max_label_chars, 30);
        assert_eq!(config.diagnostics.error_type, "SyntaxError");
        assert_eq!(config.diagnostics.context_lines, 2);
        assert_eq!(config.grammar.path, None);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "cst-treeviz")
            .expect("override to apply")
            .set_override("grammar.path", "tables.yaml")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "cst-treeviz");
        assert_eq!(config.grammar.path, Some(PathBuf::from("tables.yaml")));
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[treeviz]\nshow_line_numbers = true").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert!(config.treeviz.show_line_numbers);
        assert_eq!(config.treeviz.max_label_chars, 30);
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/simplecc.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "cst-sexp");
        assert!(Loader::new()
            .with_file("/nonexistent/simplecc.toml")
            .build()
            .is_err());
    }
}
