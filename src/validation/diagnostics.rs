//! Diagnostics - what the rule pipeline produces.
//!
//! A diagnostic pins a severity and message to a location path inside the
//! config (e.g. `repos[2].hooks[0].id`). A report collects them in rule
//! order and decides overall pass/fail.

use serde::Serialize;
use std::fmt;

use crate::error::{HooklintError, Result};

/// How bad a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The config is unusable as written.
    Error,
    /// Suspect but accepted.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A single finding against the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity of the finding.
    pub severity: Severity,
    /// Location path inside the config, e.g. `repos[0].rev`.
    pub location: String,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}

/// Ordered collection of diagnostics for one config file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// Findings in rule order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Create an empty (passing) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Append all diagnostics from another report.
    pub fn merge(&mut self, other: Report) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Whether the config is usable (no errors; warnings allowed).
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    /// Whether the report is clean under strict mode (no findings at all).
    pub fn passed_strict(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of error-severity findings.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Error out unless the config is usable, joining the error findings.
    pub fn require_passed(&self) -> Result<()> {
        if self.passed() {
            return Ok(());
        }
        let joined = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| format!("{}: {}", d.location, d.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(HooklintError::InvalidConfig(joined))
    }

    /// Number of warning-severity findings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}
