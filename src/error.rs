//! Error types for hooklint
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// All error types that can occur in hooklint
#[derive(Debug, Error)]
pub enum HooklintError {
    /// No configuration file found at or under the given location
    #[error("No pre-commit config found at: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Configuration failed schema-level validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// YAML parse/serialize error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error (report output)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad glob pattern during discovery
    #[error("Pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for hooklint operations
pub type Result<T> = std::result::Result<T, HooklintError>;
