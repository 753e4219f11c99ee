//! Top-level config file model.
//!
//! The file is read once per run and never mutated at runtime; the model
//! mirrors it key for key so normalization can round-trip it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::hook::HookSpec;
use super::repo::RepoEntry;
use crate::error::Result;

/// A parsed pre-commit configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HookConfig {
    /// Hook repositories, in invocation order.
    pub repos: Vec<RepoEntry>,

    /// Global exclude regex applied before any per-hook pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Stop at the first failing hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_fast: Option<bool>,
}

impl HookConfig {
    /// Parse a config from YAML text.
    ///
    /// Duplicate keys and unknown keys are parse errors; the schema checks
    /// in [`crate::validation`] run on the parsed model afterwards.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load and parse a config file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config = Self::from_str(&content)?;
        log::debug!(
            "Loaded {} repos from {}",
            config.repos.len(),
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Serialize back to canonical YAML.
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    /// Total number of hook references across all repos.
    pub fn hook_count(&self) -> usize {
        self.repos.iter().map(|r| r.hooks.len()).sum()
    }

    /// Iterate over every hook with its enclosing repo entry, in file order.
    pub fn iter_hooks(&self) -> impl Iterator<Item = (&RepoEntry, &HookSpec)> {
        self.repos
            .iter()
            .flat_map(|repo| repo.hooks.iter().map(move |hook| (repo, hook)))
    }
}
