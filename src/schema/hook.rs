//! Hook specs - the innermost schema entity.
//!
//! A hook spec binds an identifier exported by the referenced repository to
//! optional invocation parameters. Arguments are passed through verbatim to
//! the underlying tool.

use serde::{Deserialize, Serialize};

/// A single hook reference within a repo entry.
///
/// Only `id` is required. Everything else tunes how the external
/// orchestrator invokes the tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HookSpec {
    /// Identifier exported by the referenced repository's manifest.
    pub id: String,

    /// Display name override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Flags/values passed verbatim to the tool's invocation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Entry point (required for hooks under a `local` repo).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    /// Implementation language (required for hooks under a `local` repo).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Language runtime version pin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_version: Option<String>,

    /// Regex selecting which files the hook runs on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,

    /// Regex excluding files from the hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// File type tags the hook is limited to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    /// Git stages the hook is bound to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<String>,

    /// Extra packages installed into the hook's environment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_dependencies: Vec<String>,
}

impl HookSpec {
    /// Create a minimal hook spec with just an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            args: Vec::new(),
            entry: None,
            language: None,
            language_version: None,
            files: None,
            exclude: None,
            types: Vec::new(),
            stages: Vec::new(),
            additional_dependencies: Vec::new(),
        }
    }

    /// Add an argument (builder-style, used by tests and normalization).
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Name shown for this hook: the override if present, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
