/// Search outward from unmappable codes until some relative maps across
use crate::direct::resolve_direct_candidates;
use ontomap_core::{join_codes, Code, MappingDirection, OntomapError, OntomapResult, TraversalLimits};
use ontomap_tree::Tree;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

/// Map `codes` directly, and on failure retry with their relatives.
///
/// Every round maps the whole frontier and returns the union as soon as it is
/// non-empty. The next frontier is the parents of the current one. When
/// `include_children` is set, the children of the starting codes join the
/// second frontier too; later rounds only climb. Codes that already failed are
/// not tried again.
pub fn expand_neighborhood<'a, I>(
    codes: I,
    source_tree: &Tree,
    target_tree: &Tree,
    include_children: bool,
    direction: MappingDirection,
    limits: TraversalLimits,
) -> OntomapResult<BTreeSet<Code>>
where
    I: IntoIterator<Item = &'a Code>,
{
    let mut frontier: BTreeSet<Code> = codes.into_iter().cloned().collect();
    let origin = join_codes(&frontier);
    let mut tried: HashSet<Code> = HashSet::new();
    let mut with_children = include_children;
    let mut round = 0;

    while !frontier.is_empty() {
        round += 1;
        if round > limits.max_depth {
            return Err(OntomapError::DepthExceeded {
                operation: "neighborhood expansion",
                code: origin,
                limit: limits.max_depth,
            });
        }

        let mut mapped = BTreeSet::new();
        let mut relatives = BTreeSet::new();
        for code in &frontier {
            let Some(node) = source_tree.get(code.as_str()) else {
                warn!(code = %code, version = source_tree.version(), "neighbor not in source version, skipping");
                continue;
            };
            mapped.extend(resolve_direct_candidates(node, target_tree, direction)?);

            if let Some(parent) = &node.parent {
                relatives.insert(parent.clone());
            }
            if with_children {
                relatives.extend(node.children.iter().cloned());
            }
        }
        tried.extend(frontier.iter().cloned());

        if !mapped.is_empty() {
            debug!(origin = %origin, round, neighbors = %join_codes(&mapped), "neighborhood found");
            return Ok(mapped);
        }

        frontier = relatives.into_iter().filter(|c| !tried.contains(c)).collect();
        with_children = false;
    }

    Err(OntomapError::NeighborhoodExhausted { code: origin })
}
