use crate::config::{ScanConfig, CONFIG_FILE_NAME};
use crate::scan::{run_extract_pass, run_substitute_pass, PassFailure};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stringref")]
#[command(about = "Extracts hard-coded UI strings into a constants registry and rewrites sources to reference it")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the source tree and register new string literals
    Extract {
        /// Root directory to scan (default: from config, usually "lib")
        root: Option<PathBuf>,

        /// Configuration file (default: .stringref.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Rewrite the source tree to reference registered constants
    Substitute {
        /// Root directory to rewrite (default: from config, usually "lib")
        root: Option<PathBuf>,

        /// Configuration file (default: .stringref.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init,

    /// Show the effective configuration
    Show,
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("stringref={}", log_level))
        .init();

    match cli.command {
        Commands::Extract { root, config } => {
            let config = load_config(config, root)?;
            extract_command(&config)?;
        }

        Commands::Substitute { root, config } => {
            let config = load_config(config, root)?;
            substitute_command(&config)?;
        }

        Commands::Config { action } => {
            manage_config(action)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>, root: Option<PathBuf>) -> Result<ScanConfig> {
    let mut config = ScanConfig::load(path.as_deref())?;
    if let Some(root) = root {
        config.root = root;
    }
    Ok(config)
}

fn extract_command(config: &ScanConfig) -> Result<()> {
    let outcome = run_extract_pass(config)?;

    if outcome.new_entries.is_empty() {
        println!("No new constants found in {} file(s).", outcome.files_scanned);
    } else {
        println!("New constants added to {}:", config.registry_file);
        for (literal, name) in &outcome.new_entries {
            println!("{}: \"{}\"", name.green(), literal);
        }
    }
    eprintln!(
        "Scanned {} file(s), registry now holds {} constant(s).",
        outcome.files_scanned, outcome.total_entries
    );

    fail_on_skipped(&outcome.failures)
}

fn substitute_command(config: &ScanConfig) -> Result<()> {
    let outcome = run_substitute_pass(config)?;

    println!(
        "Rewrote {} of {} file(s) to reference {} constants.",
        outcome.files_rewritten, outcome.files_scanned, config.namespace
    );

    fail_on_skipped(&outcome.failures)
}

fn fail_on_skipped(failures: &[PassFailure]) -> Result<()> {
    if failures.is_empty() {
        return Ok(());
    }
    for failure in failures {
        eprintln!("{}: {}", "skipped".red(), failure.error);
    }
    bail!("{} file(s) could not be processed", failures.len());
}

fn manage_config(action: ConfigAction) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    match action {
        ConfigAction::Init => {
            let default_config = ScanConfig::default();
            let toml_content = toml::to_string_pretty(&default_config)
                .context("serializing default configuration")?;
            fs::write(&config_path, toml_content)
                .with_context(|| format!("writing {}", config_path.display()))?;
            println!("Configuration initialized at {}", config_path.display());
        }

        ConfigAction::Show => {
            let config = ScanConfig::load(None)?;
            let toml_content =
                toml::to_string_pretty(&config).context("serializing configuration")?;
            print!("{}", toml_content);
        }
    }

    Ok(())
}
