use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

mod cli;

use cli::Cli;
use cli::commands::{Commands, OutputFormat};
use hooklint::schema::HookConfig;
use hooklint::validation::validate_config;
use hooklint::{discover, report};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hooklint")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("hooklint.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Resolve a PATH argument (file, directory, or absent) to a config file.
fn resolve_config(path: Option<&PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) if p.is_file() => Ok(p.clone()),
        Some(p) if p.is_dir() => Ok(discover::locate(None, p)?),
        Some(p) => Ok(discover::locate(Some(p), Path::new("."))?),
        None => Ok(discover::locate(None, Path::new("."))?),
    }
}

fn run_application(cli: &Cli) -> Result<i32> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    // Subcommand PATH wins over the global --config
    let global = cli.config.as_ref();

    match &cli.command {
        // Default: validate the current directory
        None => handle_validate(global, false, OutputFormat::Text),
        Some(Commands::Validate {
            path,
            strict,
            format,
        }) => handle_validate(path.as_ref().or(global), *strict, *format),
        Some(Commands::List { path, repo }) => {
            handle_list(path.as_ref().or(global), repo.as_deref())
        }
        Some(Commands::Normalize { path, write }) => {
            handle_normalize(path.as_ref().or(global), *write)
        }
        Some(Commands::Discover { root }) => handle_discover(root.as_ref()),
    }
}

fn handle_validate(path: Option<&PathBuf>, strict: bool, format: OutputFormat) -> Result<i32> {
    let config_path = resolve_config(path)?;
    info!("Validating {}", config_path.display());

    let config = HookConfig::load_from_file(&config_path)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    let report = validate_config(&config);

    match format {
        OutputFormat::Text => print!("{}", report::render_text(&config_path, &report)),
        OutputFormat::Json => println!("{}", report::render_json(&report)?),
    }

    let passed = if strict {
        report.passed_strict()
    } else {
        report.passed()
    };
    Ok(if passed { 0 } else { 1 })
}

fn handle_list(path: Option<&PathBuf>, repo_filter: Option<&str>) -> Result<i32> {
    let config_path = resolve_config(path)?;
    let config = HookConfig::load_from_file(&config_path)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    info!(
        "Listing {} hooks from {}",
        config.hook_count(),
        config_path.display()
    );

    for (entry, hook) in config.iter_hooks() {
        let source = entry.repo.to_string();
        if let Some(filter) = repo_filter
            && !source.contains(filter)
        {
            continue;
        }

        let pin = match entry.rev.as_deref() {
            Some(rev) => format!("{}@{}", source, rev),
            None => source,
        };
        if hook.args.is_empty() {
            println!("{}  {}", hook.id.green(), pin.dimmed());
        } else {
            println!(
                "{}  {}  {}",
                hook.id.green(),
                hook.args.join(" "),
                pin.dimmed()
            );
        }
    }

    Ok(0)
}

fn handle_normalize(path: Option<&PathBuf>, write: bool) -> Result<i32> {
    let config_path = resolve_config(path)?;
    let config = HookConfig::load_from_file(&config_path)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    // Refuse to rewrite a config that fails validation
    validate_config(&config).require_passed()?;

    let yaml = config.to_yaml()?;
    if write {
        fs::write(&config_path, &yaml)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("{} {}", "Normalized:".green(), config_path.display());
    } else {
        print!("{}", yaml);
    }

    Ok(0)
}

fn handle_discover(root: Option<&PathBuf>) -> Result<i32> {
    let root = root.cloned().unwrap_or_else(|| PathBuf::from("."));
    let found = discover::find_all(&root)?;

    info!("Found {} configs under {}", found.len(), root.display());

    if found.is_empty() {
        println!("{}", "No config files found".yellow());
        return Ok(0);
    }
    for path in found {
        println!("{}", path.display());
    }

    Ok(0)
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the main application logic
    let exit_code = run_application(&cli).context("Application failed")?;

    std::process::exit(exit_code);
}
