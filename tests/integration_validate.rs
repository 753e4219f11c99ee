//! End-to-end validation integration tests
//!
//! Tests the load -> parse -> validate flow against config files on disk.

use hooklint::discover;
use hooklint::error::{HooklintError, Result};
use hooklint::schema::{HookConfig, RepoSource};
use hooklint::validation::{Severity, validate_config};
use std::fs;
use tempfile::TempDir;

const REALISTIC_CONFIG: &str = r#"
repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.0.1
    hooks:
      - id: check-yaml
      - id: check-toml
      - id: end-of-file-fixer
      - id: trailing-whitespace
  - repo: https://github.com/psf/black
    rev: 21.6b0
    hooks:
      - id: black
  - repo: https://github.com/pycqa/flake8
    rev: '3.9.2'
    hooks:
      - id: flake8
  - repo: https://github.com/PyCQA/bandit
    rev: '1.7.0'
    hooks:
      - id: bandit
        args: [--skip=B101]
  - repo: local
    hooks:
      - id: project-checks
        name: Project checks
        entry: scripts/checks.sh
        language: script
"#;

/// Integration test: a realistic config loads from disk and validates clean
#[test]
fn test_realistic_config_validates_clean() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join(".pre-commit-config.yaml");
    fs::write(&path, REALISTIC_CONFIG)?;

    let located = discover::locate(None, temp.path())?;
    let config = HookConfig::load_from_file(&located)?;
    let report = validate_config(&config);

    assert!(report.passed_strict(), "unexpected: {:?}", report.diagnostics);
    assert_eq!(config.repos.len(), 5);
    assert_eq!(config.hook_count(), 8);
    Ok(())
}

/// Integration test: the bandit acceptance scenario - args exposed verbatim
#[test]
fn test_bandit_args_exposed_verbatim() -> Result<()> {
    let config = HookConfig::from_str(REALISTIC_CONFIG)?;
    let (entry, hook) = config
        .iter_hooks()
        .find(|(_, hook)| hook.id == "bandit")
        .expect("bandit hook present");

    assert_eq!(
        entry.repo,
        RepoSource::Remote("https://github.com/PyCQA/bandit".to_string())
    );
    assert_eq!(entry.rev.as_deref(), Some("1.7.0"));
    assert_eq!(hook.args, vec!["--skip=B101".to_string()]);
    Ok(())
}

/// Integration test: a broken config produces located diagnostics
#[test]
fn test_broken_config_reports_every_finding() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join(".pre-commit-config.yaml");
    fs::write(
        &path,
        r#"
repos:
  - repo: github.com/psf/black
    rev: master
    hooks:
      - id: black
  - repo: https://github.com/pycqa/flake8
    hooks:
      - id: ''
"#,
    )?;

    let config = HookConfig::load_from_file(&path)?;
    let report = validate_config(&config);

    assert!(!report.passed());
    // scheme-less URL, missing rev, empty id
    assert_eq!(report.error_count(), 3);
    // mutable ref warning
    assert_eq!(report.warning_count(), 1);

    let locations: Vec<_> = report
        .diagnostics
        .iter()
        .map(|d| d.location.as_str())
        .collect();
    assert!(locations.contains(&"repos[0].repo"));
    assert!(locations.contains(&"repos[1].rev"));
    assert!(locations.contains(&"repos[1].hooks[0].id"));
    Ok(())
}

/// Integration test: structural YAML problems surface as parse errors
#[test]
fn test_malformed_yaml_is_a_parse_error() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join(".pre-commit-config.yaml");
    fs::write(&path, "repos:\n  - repo: [this is\n")?;

    let result = HookConfig::load_from_file(&path);
    assert!(matches!(result, Err(HooklintError::Yaml(_))));
    Ok(())
}

/// Integration test: normalize round-trips through disk without changing meaning
#[test]
fn test_normalize_round_trip_on_disk() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join(".pre-commit-config.yaml");
    fs::write(&path, REALISTIC_CONFIG)?;

    let config = HookConfig::load_from_file(&path)?;
    fs::write(&path, config.to_yaml()?)?;

    let reloaded = HookConfig::load_from_file(&path)?;
    assert_eq!(reloaded, config);
    assert!(validate_config(&reloaded).passed_strict());
    Ok(())
}

/// Integration test: recursive discovery then validation across a monorepo
#[test]
fn test_discover_and_validate_monorepo() -> Result<()> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("services/api"))?;
    fs::create_dir_all(temp.path().join("services/worker"))?;
    fs::write(
        temp.path().join("services/api/.pre-commit-config.yaml"),
        REALISTIC_CONFIG,
    )?;
    fs::write(
        temp.path().join("services/worker/.pre-commit-config.yml"),
        "repos:\n  - repo: https://github.com/psf/black\n    rev: ''\n    hooks:\n      - id: black\n",
    )?;

    let found = discover::find_all(temp.path())?;
    assert_eq!(found.len(), 2);

    let mut failing = 0;
    for path in &found {
        let config = HookConfig::load_from_file(path)?;
        let report = validate_config(&config);
        if !report.passed() {
            failing += 1;
            assert!(report
                .diagnostics
                .iter()
                .any(|d| d.severity == Severity::Error && d.location == "repos[0].rev"));
        }
    }
    assert_eq!(failing, 1);
    Ok(())
}
