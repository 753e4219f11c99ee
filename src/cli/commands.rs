//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - validate: parse a config and run the rule pipeline
//! - list: print every hook reference in file order
//! - normalize: re-serialize the parsed model as canonical YAML
//! - discover: find config files under a root

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// hooklint - validating parser for pre-commit hook configuration files
#[derive(Parser, Debug)]
#[command(name = "hooklint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path (overridden by a subcommand PATH argument)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Output format for validation reports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable, colored
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a config file (the default when no subcommand is given)
    Validate {
        /// Config file or directory to search (defaults to current directory)
        path: Option<PathBuf>,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Report output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// List every hook reference in file order
    List {
        /// Config file or directory to search (defaults to current directory)
        path: Option<PathBuf>,

        /// Show only hooks whose repo contains this substring
        #[arg(short, long)]
        repo: Option<String>,
    },

    /// Re-serialize the config as canonical YAML
    Normalize {
        /// Config file or directory to search (defaults to current directory)
        path: Option<PathBuf>,

        /// Write back to the file instead of stdout
        #[arg(short, long)]
        write: bool,
    },

    /// Find every config file under a root directory
    Discover {
        /// Root directory to walk (defaults to current directory)
        root: Option<PathBuf>,
    },
}
