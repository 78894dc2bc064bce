use super::VersionPairArgs;
use anyhow::Result;
use clap::Args;
use colored::*;
use ontomap_core::{join_codes, Code, Config, TraversalLimits};
use ontomap_resolve::{Classifier, Resolution};
use ontomap_tree::{ancestor_chain, Tree};
use ontomap_utils::{tree_section, TreeNode};
use std::collections::BTreeSet;

#[derive(Args)]
pub struct ResolveArgs {
    /// Codes to resolve
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,

    #[command(flatten)]
    pub versions: VersionPairArgs,

    /// Print the resolutions as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ResolveArgs, mut config: Config) -> Result<()> {
    let pair = args.versions.load(&mut config)?;
    let classifier = Classifier::new(&pair.source, &pair.target, pair.direction)
        .with_limits(pair.limits)
        .with_passthrough(&config.resolution);

    let resolutions = args
        .codes
        .iter()
        .map(|code| classifier.classify(code))
        .collect::<Result<Vec<_>, _>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolutions)?);
        return Ok(());
    }

    println!(
        "{} {} → {} ({})",
        "Resolving".bold(),
        pair.source.version(),
        pair.target.version(),
        pair.direction
    );
    for (i, resolution) in resolutions.iter().enumerate() {
        print_resolution(resolution, &pair.target, pair.limits, i == resolutions.len() - 1)?;
    }

    Ok(())
}

fn or_dash(codes: &BTreeSet<Code>) -> String {
    if codes.is_empty() {
        "-".to_string()
    } else {
        join_codes(codes)
    }
}

fn print_resolution(
    resolution: &Resolution,
    target: &Tree,
    limits: TraversalLimits,
    last: bool,
) -> Result<()> {
    let title = if resolution.source_code.is_blank() {
        "<blank>".to_string()
    } else {
        resolution.source_code.to_string()
    };
    let ancestor = resolution
        .closest_common_ancestor
        .as_ref()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());

    let items = vec![
        ("Outcome", resolution.outcome.label().to_string()),
        ("Candidates", or_dash(&resolution.candidates)),
        ("Neighborhood", or_dash(&resolution.neighborhood)),
        ("Closest shared parent", ancestor),
        ("New descendants", resolution.new_descendants.to_string()),
        ("Options", resolution.descriptor()),
    ];
    tree_section(&title, &items, last);

    if let Some(code) = &resolution.closest_common_ancestor {
        let path = ancestor_chain(code.as_str(), target, limits)?;
        if let Some(node) = TreeNode::from_path(&path) {
            let indent = if last { "      " } else { "│     " };
            for line in node.render().lines() {
                println!("{}{}", indent, line.dimmed());
            }
        }
    }

    Ok(())
}
