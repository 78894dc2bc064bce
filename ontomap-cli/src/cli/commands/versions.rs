use super::SourceArgs;
use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use ontomap_core::{Config, VersionInfo};
use ontomap_utils::{create_standard_table, header_cell, info};

#[derive(Args)]
pub struct VersionsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Include versions the service marks as hidden
    #[arg(long)]
    pub all: bool,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: VersionsArgs, mut config: Config) -> Result<()> {
    let tree_source = args.source.open(&mut config)?;
    let catalog = tree_source.catalog()?;
    let latest = catalog.latest().map(|v| v.api_identifier.clone());

    let listed: Vec<&VersionInfo> = catalog
        .versions()
        .iter()
        .filter(|v| args.all || v.visible)
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    if listed.is_empty() {
        info("No versions available");
        return Ok(());
    }

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Version"),
        header_cell("Released"),
        header_cell("Description"),
    ]);
    for version in listed {
        let mut name = version.api_identifier.clone();
        if latest.as_deref() == Some(version.api_identifier.as_str()) {
            name.push_str(" (latest)");
        }
        table.add_row(vec![
            Cell::new(name),
            Cell::new(version.release_date.format("%Y-%m-%d").to_string()),
            Cell::new(&version.description),
        ]);
    }
    println!("{}", table);

    Ok(())
}
