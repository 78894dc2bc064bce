//! Ancestor paths, closest common ancestors and descendant closure
//!
//! Every walk here is iterative, carries a visited set, and stops with
//! `DepthExceeded` once it goes past `TraversalLimits::max_depth` levels.

use crate::tree::Tree;
use ontomap_core::{Code, OntomapError, OntomapResult, TraversalLimits};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, trace};

/// Path from the root down to `code`, inclusive at both ends.
///
/// A parent link that points outside the tree ends the walk, so the first
/// element is either a real root or a node with a dangling parent.
pub fn ancestor_chain(code: &str, tree: &Tree, limits: TraversalLimits) -> OntomapResult<Vec<Code>> {
    let start = tree.get(code).ok_or_else(|| OntomapError::MissingCode {
        code: code.to_string(),
        version: tree.version().to_string(),
    })?;

    let mut chain = vec![start.code.clone()];
    let mut seen: HashSet<&str> = HashSet::from([start.code.as_str()]);
    let mut current = start;

    while let Some(parent) = current.parent.as_ref() {
        let Some(parent_node) = tree.get(parent.as_str()) else {
            break;
        };
        if !seen.insert(parent_node.code.as_str()) {
            return Err(OntomapError::CycleDetected {
                code: parent_node.code.to_string(),
            });
        }
        if chain.len() >= limits.max_depth {
            return Err(OntomapError::DepthExceeded {
                operation: "ancestor chain",
                code: code.to_string(),
                limit: limits.max_depth,
            });
        }
        chain.push(parent_node.code.clone());
        current = parent_node;
    }

    chain.reverse();
    Ok(chain)
}

/// Deepest code that is an ancestor (or the node itself) of every input code
pub fn closest_common_ancestor<'a, I>(codes: I, tree: &Tree, limits: TraversalLimits) -> OntomapResult<Code>
where
    I: IntoIterator<Item = &'a Code>,
{
    let members: BTreeSet<&Code> = codes.into_iter().collect();
    if members.is_empty() {
        return Err(OntomapError::InvalidInput(
            "closest common ancestor of an empty code set".to_string(),
        ));
    }

    let chains = members
        .iter()
        .map(|code| ancestor_chain(code.as_str(), tree, limits))
        .collect::<OntomapResult<Vec<_>>>()?;

    // Non-empty by construction: every chain holds at least its own code
    let min_len = chains.iter().map(Vec::len).min().unwrap_or(1);
    let mut index = min_len - 1;
    loop {
        let candidate = &chains[0][index];
        if chains.iter().all(|chain| &chain[index] == candidate) {
            trace!(ancestor = %candidate, members = members.len(), "closest common ancestor");
            return Ok(candidate.clone());
        }
        if index == 0 {
            break;
        }
        index -= 1;
    }

    debug!(version = tree.version(), "codes lie in disconnected parts of the tree");
    Err(OntomapError::NoCommonAncestor {
        codes: members.iter().map(|c| c.to_string()).collect(),
    })
}

/// All strict descendants of `codes`. Codes absent from the tree contribute nothing.
pub fn descendant_closure<'a, I>(codes: I, tree: &Tree, limits: TraversalLimits) -> OntomapResult<BTreeSet<Code>>
where
    I: IntoIterator<Item = &'a Code>,
{
    let mut frontier: Vec<&Code> = codes.into_iter().collect();
    let mut visited: HashSet<&Code> = frontier.iter().copied().collect();
    let mut descendants = BTreeSet::new();
    let mut depth = 0;

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for code in &frontier {
            for child in tree.children_of(code.as_str()) {
                descendants.insert(child.clone());
                if visited.insert(child) {
                    next.push(child);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        depth += 1;
        if depth > limits.max_depth {
            return Err(OntomapError::DepthExceeded {
                operation: "descendant closure",
                code: frontier
                    .first()
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
                limit: limits.max_depth,
            });
        }
        frontier = next;
    }

    Ok(descendants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::RawNode;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn code(c: &str) -> Code {
        Code::from(c)
    }

    fn codes(items: &[&str]) -> BTreeSet<Code> {
        items.iter().map(|c| Code::from(*c)).collect()
    }

    fn lymphoid() -> Tree {
        Tree::from_nodes(
            "v1",
            vec![
                RawNode::new("TISSUE", ""),
                RawNode::new("LYMPH", "TISSUE"),
                RawNode::new("SKIN", "TISSUE"),
                RawNode::new("MEL", "SKIN"),
                RawNode::new("TNKL", "LYMPH"),
                RawNode::new("CTCL", "TNKL"),
                RawNode::new("SEZS", "CTCL"),
                RawNode::new("MYCF", "CTCL"),
                RawNode::new("ISLAND", ""),
            ],
        )
    }

    #[test]
    fn test_ancestor_chain_root_first() {
        let tree = lymphoid();
        let chain = ancestor_chain("SEZS", &tree, TraversalLimits::default()).unwrap();
        assert_eq!(
            chain,
            vec![code("TISSUE"), code("LYMPH"), code("TNKL"), code("CTCL"), code("SEZS")]
        );
        assert_eq!(
            ancestor_chain("TISSUE", &tree, TraversalLimits::default()).unwrap(),
            vec![code("TISSUE")]
        );
    }

    #[test]
    fn test_ancestor_chain_missing_code() {
        let tree = lymphoid();
        let err = ancestor_chain("NOPE", &tree, TraversalLimits::default()).unwrap_err();
        assert!(matches!(err, OntomapError::MissingCode { ref code, ref version } if code == "NOPE" && version == "v1"));
    }

    #[test]
    fn test_ancestor_chain_detects_cycle() {
        let tree = Tree::from_nodes(
            "loop",
            vec![RawNode::new("A", "B"), RawNode::new("B", "C"), RawNode::new("C", "A")],
        );
        let err = ancestor_chain("A", &tree, TraversalLimits::default()).unwrap_err();
        assert!(matches!(err, OntomapError::CycleDetected { .. }));
    }

    #[test]
    fn test_ancestor_chain_depth_limit() {
        let tree = lymphoid();
        let err = ancestor_chain("SEZS", &tree, TraversalLimits::new(3)).unwrap_err();
        assert!(matches!(err, OntomapError::DepthExceeded { limit: 3, .. }));
        assert!(ancestor_chain("SEZS", &tree, TraversalLimits::new(5)).is_ok());
    }

    #[test]
    fn test_cca_examples() {
        let tree = lymphoid();
        let limits = TraversalLimits::default();
        assert_eq!(
            closest_common_ancestor(&codes(&["SEZS", "MYCF"]), &tree, limits).unwrap(),
            code("CTCL")
        );
        assert_eq!(
            closest_common_ancestor(&codes(&["SEZS", "CTCL"]), &tree, limits).unwrap(),
            code("CTCL")
        );
        assert_eq!(
            closest_common_ancestor(&codes(&["SEZS", "MEL"]), &tree, limits).unwrap(),
            code("TISSUE")
        );
        assert_eq!(
            closest_common_ancestor(&codes(&["MYCF"]), &tree, limits).unwrap(),
            code("MYCF")
        );
    }

    #[test]
    fn test_cca_empty_and_disconnected() {
        let tree = lymphoid();
        let limits = TraversalLimits::default();
        let err = closest_common_ancestor(&BTreeSet::new(), &tree, limits).unwrap_err();
        assert!(matches!(err, OntomapError::InvalidInput(_)));

        let err = closest_common_ancestor(&codes(&["MEL", "ISLAND"]), &tree, limits).unwrap_err();
        match err {
            OntomapError::NoCommonAncestor { codes } => {
                assert_eq!(codes, vec!["ISLAND".to_string(), "MEL".to_string()])
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_descendant_closure() {
        let tree = lymphoid();
        let limits = TraversalLimits::default();
        assert_eq!(
            descendant_closure(&codes(&["TNKL"]), &tree, limits).unwrap(),
            codes(&["CTCL", "SEZS", "MYCF"])
        );
        assert!(descendant_closure(&codes(&["SEZS"]), &tree, limits)
            .unwrap()
            .is_empty());
        assert!(descendant_closure(&codes(&["UNKNOWN"]), &tree, limits)
            .unwrap()
            .is_empty());
        assert_eq!(
            descendant_closure(&codes(&["SKIN", "CTCL"]), &tree, limits).unwrap(),
            codes(&["MEL", "SEZS", "MYCF"])
        );
    }

    #[test]
    fn test_descendant_closure_depth_limit() {
        let tree = lymphoid();
        let err = descendant_closure(&codes(&["TISSUE"]), &tree, TraversalLimits::new(2)).unwrap_err();
        assert!(matches!(err, OntomapError::DepthExceeded { operation: "descendant closure", .. }));
    }

    /// Random tree where node `i` hangs under some node in `0..i`
    fn arbitrary_tree() -> impl Strategy<Value = Tree> {
        prop::collection::vec(any::<prop::sample::Index>(), 1..40).prop_map(|parents| {
            let mut nodes = vec![RawNode::new("N0", "")];
            for (i, parent) in parents.iter().enumerate() {
                let child = i + 1;
                let parent = parent.index(child);
                nodes.push(RawNode::new(format!("N{child}"), format!("N{parent}")));
            }
            Tree::from_nodes("generated", nodes)
        })
    }

    proptest! {
        #[test]
        fn prop_cca_of_singleton_is_itself(tree in arbitrary_tree(), pick in any::<prop::sample::Index>()) {
            let all: Vec<Code> = tree.codes().cloned().collect();
            let member = &all[pick.index(all.len())];
            let cca = closest_common_ancestor([member], &tree, TraversalLimits::default()).unwrap();
            prop_assert_eq!(&cca, member);
        }

        #[test]
        fn prop_cca_is_deepest_shared_ancestor(
            tree in arbitrary_tree(),
            picks in prop::collection::vec(any::<prop::sample::Index>(), 1..6),
        ) {
            let limits = TraversalLimits::default();
            let all: Vec<Code> = tree.codes().cloned().collect();
            let members: BTreeSet<Code> = picks.iter().map(|p| all[p.index(all.len())].clone()).collect();
            let cca = closest_common_ancestor(&members, &tree, limits).unwrap();

            for member in &members {
                let chain = ancestor_chain(member.as_str(), &tree, limits).unwrap();
                prop_assert!(chain.contains(&cca));
            }
            for child in tree.children_of(cca.as_str()) {
                let shared = members.iter().all(|m| {
                    ancestor_chain(m.as_str(), &tree, limits).unwrap().contains(child)
                });
                prop_assert!(!shared);
            }
        }
    }
}
