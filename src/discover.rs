//! Config file discovery.
//!
//! Search order:
//! 1. Explicit path if provided
//! 2. .pre-commit-config.yaml in the target directory
//! 3. .pre-commit-config.yml in the target directory
//!
//! Recursive discovery walks a whole tree for monorepos that carry one
//! config per project.

use std::path::{Path, PathBuf};

use crate::error::{HooklintError, Result};
use crate::schema::CONFIG_FILE_NAMES;

/// Locate the config file for a directory.
///
/// An explicit path takes precedence and must exist; otherwise the standard
/// file names are tried in order.
pub fn locate(explicit_path: Option<&PathBuf>, dir: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Ok(path.clone());
        }
        return Err(HooklintError::ConfigNotFound(path.clone()));
    }

    for name in CONFIG_FILE_NAMES {
        let candidate = dir.join(name);
        if candidate.exists() {
            log::debug!("Found config at {}", candidate.display());
            return Ok(candidate);
        }
    }

    Err(HooklintError::ConfigNotFound(dir.to_path_buf()))
}

/// Find every config file under a root directory, sorted by path.
pub fn find_all(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    // The root is a literal path; escape it so directory names containing
    // glob metacharacters ([, ], *, ?) still match.
    let escaped_root = glob::Pattern::escape(&root.display().to_string());

    for name in CONFIG_FILE_NAMES {
        let pattern = format!("{}/**/{}", escaped_root, name);
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => found.push(path),
                Err(e) => log::warn!("Skipping unreadable path during discovery: {}", e),
            }
        }
    }

    found.sort();
    Ok(found)
}
