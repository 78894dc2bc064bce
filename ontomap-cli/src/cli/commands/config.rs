use anyhow::Result;
use clap::Args;
use ontomap_core::{save_config, Config};
use ontomap_utils::success;
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the configuration to this file instead of printing it
    #[arg(long, value_name = "FILE")]
    pub write: Option<PathBuf>,
}

/// Show the configuration in effect (defaults merged with --config)
pub fn run(args: ConfigArgs, config: Config) -> Result<()> {
    match args.write {
        Some(path) => {
            save_config(&path, &config)?;
            success(&format!("Configuration written to {}", path.display()));
        }
        None => print!("{}", toml::to_string_pretty(&config)?),
    }
    Ok(())
}
