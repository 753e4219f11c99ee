//! Repo entries - where hooks come from.
//!
//! A repo entry pins a source location to a revision and lists the hooks
//! taken from it. Two sentinel sources exist alongside remote URLs: `local`
//! (hooks defined inline in the config) and `meta` (hooks shipped by the
//! orchestrator itself). Neither takes a revision.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::hook::HookSpec;

/// Source location of a hook repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum RepoSource {
    /// A remote repository URL.
    Remote(String),
    /// Hooks defined inline in this config file.
    Local,
    /// Built-in hooks of the consuming orchestrator.
    Meta,
}

impl From<String> for RepoSource {
    fn from(value: String) -> Self {
        match value.as_str() {
            "local" => RepoSource::Local,
            "meta" => RepoSource::Meta,
            _ => RepoSource::Remote(value),
        }
    }
}

impl From<RepoSource> for String {
    fn from(value: RepoSource) -> Self {
        match value {
            RepoSource::Remote(url) => url,
            RepoSource::Local => "local".to_string(),
            RepoSource::Meta => "meta".to_string(),
        }
    }
}

impl fmt::Display for RepoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoSource::Remote(url) => f.write_str(url),
            RepoSource::Local => f.write_str("local"),
            RepoSource::Meta => f.write_str("meta"),
        }
    }
}

impl RepoSource {
    /// Whether this source is a remote URL (and therefore needs a rev).
    pub fn is_remote(&self) -> bool {
        matches!(self, RepoSource::Remote(_))
    }

    /// The URL for remote sources.
    pub fn url(&self) -> Option<&str> {
        match self {
            RepoSource::Remote(url) => Some(url),
            _ => None,
        }
    }
}

/// One entry in the top-level `repos` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RepoEntry {
    /// Source location: a URL, `local`, or `meta`.
    pub repo: RepoSource,

    /// Version tag pinning which release of the tool to invoke.
    /// Required for remote sources, ignored for sentinels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,

    /// Hooks taken from this repository, in invocation order.
    #[serde(default)]
    pub hooks: Vec<HookSpec>,
}

impl RepoEntry {
    /// Create a remote repo entry.
    pub fn remote(url: impl Into<String>, rev: impl Into<String>) -> Self {
        Self {
            repo: RepoSource::Remote(url.into()),
            rev: Some(rev.into()),
            hooks: Vec::new(),
        }
    }

    /// Create a local repo entry.
    pub fn local() -> Self {
        Self {
            repo: RepoSource::Local,
            rev: None,
            hooks: Vec::new(),
        }
    }

    /// Add a hook (builder-style).
    pub fn hook(mut self, hook: HookSpec) -> Self {
        self.hooks.push(hook);
        self
    }
}
