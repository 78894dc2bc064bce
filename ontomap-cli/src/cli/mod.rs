pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ontomap",
    version,
    about = "Translate ontology codes between versions of a hierarchical ontology",
    long_about = "Ontomap maps codes from one version of a hierarchical ontology (such as OncoTree) \
                  to another, following renamings, merges and revocations, and falls back to the \
                  surrounding tree when a code has no direct counterpart."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "PATH", env = "ONTOMAP_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate the code column of a tab-delimited record file
    Translate(commands::translate::TranslateArgs),

    /// Resolve individual codes and show how they map
    Resolve(commands::resolve::ResolveArgs),

    /// List the available ontology versions
    Versions(commands::versions::VersionsArgs),

    /// Show or write the effective configuration
    Config(commands::config::ConfigArgs),
}
