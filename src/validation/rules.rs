//! Schema-level validation rules.
//!
//! Each rule takes part of the parsed model and returns the diagnostics it
//! found, with locations spelled as paths into the file
//! (`repos[2].hooks[0].id`). The pipeline in the parent module runs them in
//! a fixed order.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use super::diagnostics::Diagnostic;
use crate::schema::{HookConfig, RepoEntry, RepoSource};

/// Schemes accepted for remote repository URLs.
const ALLOWED_SCHEMES: &[&str] = &["https", "http", "ssh", "git"];

/// Mutable refs that defeat version pinning.
const MUTABLE_REFS: &[&str] = &["master", "main", "HEAD"];

/// scp-like git addresses: user@host:path
static SCP_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9._-]+:.+$").expect("static regex"));

fn repo_location(index: usize, field: &str) -> String {
    format!("repos[{}].{}", index, field)
}

fn hook_location(repo_index: usize, hook_index: usize, field: &str) -> String {
    format!("repos[{}].hooks[{}].{}", repo_index, hook_index, field)
}

/// Whether a string is a syntactically valid repository URL.
pub fn is_valid_repo_url(value: &str) -> bool {
    if SCP_LIKE.is_match(value) {
        return true;
    }
    match Url::parse(value) {
        Ok(url) => ALLOWED_SCHEMES.contains(&url.scheme()) && url.has_host(),
        Err(_) => false,
    }
}

/// Remote sources must be syntactically valid repository URLs.
pub fn check_repo_source(index: usize, entry: &RepoEntry) -> Vec<Diagnostic> {
    let mut found = Vec::new();
    if let RepoSource::Remote(url) = &entry.repo
        && !is_valid_repo_url(url)
    {
        found.push(Diagnostic::error(
            repo_location(index, "repo"),
            format!("'{}' is not a valid repository URL", url),
        ));
    }
    found
}

/// Remote entries need a non-empty rev; sentinels must not carry one.
pub fn check_rev(index: usize, entry: &RepoEntry) -> Vec<Diagnostic> {
    let mut found = Vec::new();
    let location = repo_location(index, "rev");

    if entry.repo.is_remote() {
        match entry.rev.as_deref() {
            None => found.push(Diagnostic::error(
                location,
                "remote repo requires a rev (version tag)",
            )),
            Some("") => found.push(Diagnostic::error(
                location,
                "rev must be a non-empty version string",
            )),
            Some(rev) if MUTABLE_REFS.contains(&rev) => found.push(Diagnostic::warning(
                location,
                format!("rev '{}' is a mutable ref and defeats version pinning", rev),
            )),
            Some(_) => {}
        }
    } else if entry.rev.is_some() {
        found.push(Diagnostic::warning(
            location,
            format!("rev is ignored for '{}' repos", entry.repo),
        ));
    }

    found
}

/// Hook ids must be non-empty; local hooks need an entry point and language.
pub fn check_hooks(index: usize, entry: &RepoEntry) -> Vec<Diagnostic> {
    let mut found = Vec::new();

    if entry.hooks.is_empty() {
        found.push(Diagnostic::warning(
            repo_location(index, "hooks"),
            "entry has no hooks and does nothing",
        ));
    }

    for (hook_index, hook) in entry.hooks.iter().enumerate() {
        if hook.id.is_empty() {
            found.push(Diagnostic::error(
                hook_location(index, hook_index, "id"),
                "hook id must be a non-empty string",
            ));
        }

        if entry.repo == RepoSource::Local {
            if hook.entry.is_none() {
                found.push(Diagnostic::error(
                    hook_location(index, hook_index, "entry"),
                    "local hooks require an entry point",
                ));
            }
            if hook.language.is_none() {
                found.push(Diagnostic::error(
                    hook_location(index, hook_index, "language"),
                    "local hooks require a language",
                ));
            }
        }
    }

    found
}

/// Per-hook and global file patterns must compile as regexes.
pub fn check_patterns(config: &HookConfig) -> Vec<Diagnostic> {
    let mut found = Vec::new();

    if let Some(pattern) = &config.exclude {
        check_one_pattern("exclude", pattern, &mut found);
    }

    for (repo_index, entry) in config.repos.iter().enumerate() {
        for (hook_index, hook) in entry.hooks.iter().enumerate() {
            if let Some(pattern) = &hook.files {
                check_one_pattern(
                    &hook_location(repo_index, hook_index, "files"),
                    pattern,
                    &mut found,
                );
            }
            if let Some(pattern) = &hook.exclude {
                check_one_pattern(
                    &hook_location(repo_index, hook_index, "exclude"),
                    pattern,
                    &mut found,
                );
            }
        }
    }

    found
}

fn check_one_pattern(location: &str, pattern: &str, found: &mut Vec<Diagnostic>) {
    if let Err(e) = Regex::new(pattern) {
        found.push(Diagnostic::error(
            location.to_string(),
            format!("invalid regex '{}': {}", pattern, e),
        ));
    }
}

/// The same hook id listed twice under one repo is almost always a mistake.
pub fn check_duplicate_hooks(config: &HookConfig) -> Vec<Diagnostic> {
    let mut found = Vec::new();
    let mut seen: Vec<(String, &str)> = Vec::new();

    for (repo_index, entry) in config.repos.iter().enumerate() {
        for (hook_index, hook) in entry.hooks.iter().enumerate() {
            let key = (entry.repo.to_string(), hook.id.as_str());
            if seen.contains(&key) {
                found.push(Diagnostic::warning(
                    hook_location(repo_index, hook_index, "id"),
                    format!("duplicate hook '{}' for repo '{}'", hook.id, entry.repo),
                ));
            } else {
                seen.push(key);
            }
        }
    }

    found
}
