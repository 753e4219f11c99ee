//! Typed model of the pre-commit config schema.
//!
//! Three layers, mirroring the file's nesting:
//! 1. [`HookConfig`] - the file itself (`repos` plus global options)
//! 2. [`RepoEntry`] - one source location with a version pin
//! 3. [`HookSpec`] - one hook id with its invocation parameters
//!
//! Parsing is strict (unknown and duplicate keys are errors); semantic
//! checks live in [`crate::validation`].

pub use self::config::HookConfig;
pub use self::hook::HookSpec;
pub use self::repo::{RepoEntry, RepoSource};

mod config;
mod hook;
mod repo;

/// File names the discover module looks for, in preference order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".pre-commit-config.yaml", ".pre-commit-config.yml"];
