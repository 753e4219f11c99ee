//! hooklint - a validating parser for pre-commit hook configuration files
//!
//! Parses `.pre-commit-config.yaml` files into a typed model, checks the
//! schema-level properties a usable config must hold, and reports
//! diagnostics. All real linting work belongs to the external tools the
//! file references; this crate only validates the references themselves.

pub mod discover;
pub mod error;
pub mod report;
pub mod schema;
pub mod validation;

pub use error::{HooklintError, Result};
