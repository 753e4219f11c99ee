//! Report rendering for the terminal and for machine consumption.

use colored::*;
use std::path::Path;

use crate::error::Result;
use crate::validation::{Report, Severity};

/// Render one line per diagnostic, colored by severity.
pub fn render_text(path: &Path, report: &Report) -> String {
    let mut out = String::new();

    for diagnostic in &report.diagnostics {
        let severity = match diagnostic.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        out.push_str(&format!(
            "{}: {}: {}: {}\n",
            path.display(),
            severity,
            diagnostic.location,
            diagnostic.message
        ));
    }

    out.push_str(&render_summary(path, report));
    out
}

/// One-line pass/fail summary.
pub fn render_summary(path: &Path, report: &Report) -> String {
    if report.passed_strict() {
        format!("{}: {}\n", path.display(), "ok".green())
    } else {
        format!(
            "{}: {} ({}, {})\n",
            path.display(),
            if report.passed() {
                "ok with warnings".yellow().to_string()
            } else {
                "invalid".red().to_string()
            },
            count(report.error_count(), "error"),
            count(report.warning_count(), "warning")
        )
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Serialize the report as pretty JSON.
pub fn render_json(report: &Report) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Diagnostic;
    use std::path::PathBuf;

    fn no_color() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_text_clean() {
        no_color();
        let report = Report::new();
        let text = render_text(&PathBuf::from("x.yaml"), &report);
        assert_eq!(text, "x.yaml: ok\n");
    }

    #[test]
    fn test_render_text_with_findings() {
        no_color();
        let mut report = Report::new();
        report.push(Diagnostic::error("repos[0].rev", "must not be empty"));
        report.push(Diagnostic::warning("repos[1].hooks", "does nothing"));

        let text = render_text(&PathBuf::from("x.yaml"), &report);
        assert!(text.contains("x.yaml: error: repos[0].rev: must not be empty"));
        assert!(text.contains("x.yaml: warning: repos[1].hooks: does nothing"));
        assert!(text.contains("(1 error, 1 warning)"));
    }

    #[test]
    fn test_render_summary_pluralizes_counts() {
        no_color();
        let mut report = Report::new();
        report.push(Diagnostic::error("repos[0].rev", "must not be empty"));
        report.push(Diagnostic::warning("repos[1].hooks", "does nothing"));
        report.push(Diagnostic::warning("repos[2].rev", "mutable ref"));

        let summary = render_summary(&PathBuf::from("x.yaml"), &report);
        assert!(summary.contains("(1 error, 2 warnings)"));

        report.push(Diagnostic::error("repos[3].repo", "not a valid URL"));
        let summary = render_summary(&PathBuf::from("x.yaml"), &report);
        assert!(summary.contains("(2 errors, 2 warnings)"));
    }

    #[test]
    fn test_render_summary_warnings_only() {
        no_color();
        let mut report = Report::new();
        report.push(Diagnostic::warning("repos[0].rev", "mutable ref"));
        let summary = render_summary(&PathBuf::from("x.yaml"), &report);
        assert!(summary.contains("ok with warnings"));
    }

    #[test]
    fn test_render_json() {
        let mut report = Report::new();
        report.push(Diagnostic::error("repos[0].repo", "not a valid URL"));
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["diagnostics"][0]["severity"], "error");
        assert_eq!(value["diagnostics"][0]["location"], "repos[0].repo");
    }
}
