use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;
mod report;

use crate::cli::{Cli, Commands};
use ontomap_core::{load_config, Config, OntomapError};

fn main() {
    let cli = Cli::parse();

    // ONTOMAP_LOG sets the level; RUST_LOG wins when present
    let log_level = std::env::var("ONTOMAP_LOG").unwrap_or_else(|_| {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<OntomapError>() {
            Some(OntomapError::Configuration(_)) => 2,
            Some(OntomapError::Io(_)) => 3,
            Some(OntomapError::Parse(_)) => 4,
            Some(err) if err.is_consistency_error() => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    match cli.command {
        Commands::Translate(args) => crate::cli::commands::translate::run(args, config),
        Commands::Resolve(args) => crate::cli::commands::resolve::run(args, config),
        Commands::Versions(args) => crate::cli::commands::versions::run(args, config),
        Commands::Config(args) => crate::cli::commands::config::run(args, config),
    }
}
