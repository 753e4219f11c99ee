//! CLI module for hooklint - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for validation, listing,
//! normalization, and discovery.

pub mod commands;

pub use commands::Cli;
