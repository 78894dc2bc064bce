pub mod config;
pub mod resolve;
pub mod translate;
pub mod versions;

use anyhow::Result;
use clap::Args;
use ontomap_core::config::SourceConfig;
use ontomap_core::{Config, MappingDirection, OntomapError, TraversalLimits};
use ontomap_tree::{source_from_config, Tree, TreeSource};
use ontomap_utils::create_spinner;
use ontomap_utils::report::Reportable;
use std::path::{Path, PathBuf};
use tracing::info;

/// Save a report to a file in the specified format
///
/// This is a helper function that all commands can use to generate
/// reports in a consistent way.
pub fn save_report<T: Reportable>(result: &T, format: &str, output_path: &Path) -> Result<()> {
    use ontomap_utils::report::{render_csv, render_html, render_json, render_text};

    let report = result.to_report();
    let content = match format.to_lowercase().as_str() {
        "html" => render_html(&report)?,
        "json" => render_json(&report)?,
        "csv" => render_csv(&report)?,
        "text" | "txt" => render_text(&report)?,
        _ => anyhow::bail!("Unknown format '{}'. Use: text, html, json, csv", format),
    };

    std::fs::write(output_path, content)?;
    Ok(())
}

/// Where ontology trees come from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory holding `<version>.json` trees and `versions.json`
    #[arg(long = "trees", value_name = "DIR", conflicts_with = "api_url")]
    pub trees: Option<PathBuf>,

    /// Base URL of the ontology web service
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,
}

impl SourceArgs {
    pub fn apply(&self, config: &mut SourceConfig) {
        if let Some(dir) = &self.trees {
            config.tree_dir = Some(dir.display().to_string());
        }
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
            config.tree_dir = None;
        }
    }

    pub fn open(&self, config: &mut Config) -> Result<Box<dyn TreeSource>> {
        self.apply(&mut config.source);
        Ok(source_from_config(&config.source)?)
    }
}

/// The source/target version pair every mapping command needs
#[derive(Args, Debug, Clone)]
pub struct VersionPairArgs {
    /// Version the codes are currently in
    #[arg(short = 's', long = "source-version", value_name = "VERSION")]
    pub source_version: String,

    /// Version to map the codes to
    #[arg(short = 't', long = "target-version", value_name = "VERSION")]
    pub target_version: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Maximum depth for tree walks (overrides resolution.max_depth)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

/// Both trees of a mapping, loaded and ready
pub struct MappingPair {
    pub source: Tree,
    pub target: Tree,
    pub direction: MappingDirection,
    pub limits: TraversalLimits,
}

impl VersionPairArgs {
    pub fn load(&self, config: &mut Config) -> Result<MappingPair> {
        if let Some(depth) = self.max_depth {
            if depth == 0 {
                return Err(OntomapError::Configuration(
                    "--max-depth must be at least 1".to_string(),
                )
                .into());
            }
            config.resolution.max_depth = depth;
        }

        let tree_source = self.source.open(config)?;
        let catalog = tree_source.catalog()?;
        let direction = catalog.direction(&self.source_version, &self.target_version)?;
        info!(
            source = %self.source_version,
            target = %self.target_version,
            %direction,
            "Mapping between versions"
        );

        let spinner = create_spinner(&format!("Loading {}...", self.source_version));
        let source = tree_source.load_tree(&self.source_version)?;
        spinner.set_message(format!("Loading {}...", self.target_version));
        let target = tree_source.load_tree(&self.target_version)?;
        spinner.finish_and_clear();
        info!(
            source_nodes = source.len(),
            target_nodes = target.len(),
            "Loaded trees"
        );

        Ok(MappingPair {
            source,
            target,
            direction,
            limits: TraversalLimits::from(&config.resolution),
        })
    }
}
