//! Error reporting
//!
//! The parser only returns errors. Turning one into text for a user is done here:
//! a header line `<ErrorType> at <line>:<column>: <message>` followed by the
//! numbered source lines around the error, the offending line marked with `>>`.

use crate::simplecc::parsing::ParseError;
use crate::simplecc::token::Location;
use serde::Serialize;
use std::io::{self, Write};

/// A located error ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub error_type: String,
    pub location: Location,
    pub message: String,
    /// Source line of the error, used when the full source is unavailable.
    pub line: String,
}

impl Diagnostic {
    pub fn new(error_type: impl Into<String>, location: Location, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            location,
            message: message.into(),
            line: String::new(),
        }
    }

    pub fn from_parse_error(error_type: impl Into<String>, err: &ParseError) -> Self {
        Self {
            error_type: error_type.into(),
            location: err.location,
            message: err.message.clone(),
            line: err.line.clone(),
        }
    }

    /// The one-line form, without source context.
    pub fn header(&self) -> String {
        format!("{} at {}: {}", self.error_type, self.location, self.message)
    }

    /// Header plus `context_lines` lines of source on each side of the error.
    pub fn render(&self, source: Option<&str>, context_lines: usize) -> String {
        let mut out = self.header();
        out.push('\n');
        match source {
            Some(source) if self.location.line > 0 => {
                out.push_str(&format_source_context(source, self.location, context_lines));
            }
            _ if !self.line.is_empty() => {
                out.push_str(&format!(">> {:3} | {}\n", self.location.line, self.line));
            }
            _ => {}
        }
        out
    }
}

/// Numbered source lines around `location`, the error line marked with `>>`.
pub fn format_source_context(source: &str, location: Location, context_lines: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    // 0-based index of the error line
    let error_line = location.line.saturating_sub(1);

    let start_line = error_line.saturating_sub(context_lines);
    let end_line = (error_line + context_lines + 1).min(lines.len());

    let mut context = String::new();
    for line_num in start_line..end_line {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, lines[line_num]));
    }
    context
}

/// Counts and prints diagnostics of one error type.
#[derive(Debug, Clone)]
pub struct ErrorManager {
    error_type: String,
    context_lines: usize,
    error_count: usize,
}

impl ErrorManager {
    pub fn new(error_type: impl Into<String>, context_lines: usize) -> Self {
        Self {
            error_type: error_type.into(),
            context_lines,
            error_count: 0,
        }
    }

    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// Render `err` against `source` into `out` and count it.
    pub fn report_parse_error<W: Write>(
        &mut self,
        out: &mut W,
        err: &ParseError,
        source: Option<&str>,
    ) -> io::Result<Diagnostic> {
        let diagnostic = Diagnostic::from_parse_error(self.error_type.clone(), err);
        self.report(out, &diagnostic, source)?;
        Ok(diagnostic)
    }

    pub fn report<W: Write>(
        &mut self,
        out: &mut W,
        diagnostic: &Diagnostic,
        source: Option<&str>,
    ) -> io::Result<()> {
        self.error_count += 1;
        out.write_all(diagnostic.render(source, self.context_lines).as_bytes())
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn is_ok(&self) -> bool {
        self.error_count == 0
    }
}

impl Default for ErrorManager {
    fn default() -> Self {
        Self::new("SyntaxError", 2)
    }
}
