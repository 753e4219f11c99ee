//! Schema validation pipeline.
//!
//! Parsing already guarantees structural soundness (types, nesting, no
//! duplicate or unknown keys); this layer checks the semantic properties a
//! parsed config must hold: valid repo URLs, non-empty revs and hook ids,
//! compilable file patterns, and a handful of hygiene warnings.
//!
//! All rules run; nothing fails fast, so one pass reports every finding.

pub use self::diagnostics::{Diagnostic, Report, Severity};

pub mod diagnostics;
pub mod rules;

use crate::schema::HookConfig;

/// Run every rule against a parsed config and collect the findings.
pub fn validate_config(config: &HookConfig) -> Report {
    let mut report = Report::new();

    for (index, entry) in config.repos.iter().enumerate() {
        for diagnostic in rules::check_repo_source(index, entry) {
            report.push(diagnostic);
        }
        for diagnostic in rules::check_rev(index, entry) {
            report.push(diagnostic);
        }
        for diagnostic in rules::check_hooks(index, entry) {
            report.push(diagnostic);
        }
    }

    for diagnostic in rules::check_patterns(config) {
        report.push(diagnostic);
    }
    for diagnostic in rules::check_duplicate_hooks(config) {
        report.push(diagnostic);
    }

    log::debug!(
        "Validation finished: {} errors, {} warnings",
        report.error_count(),
        report.warning_count()
    );

    report
}
