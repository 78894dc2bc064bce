//! Properties over generated trees

use ontomap_core::{Code, MappingDirection};
use ontomap_resolve::{classify, OutcomeClass};
use ontomap_tree::{RawNode, Tree};
use proptest::prelude::*;

/// Random rooted tree: node i hangs under one of the nodes before it
fn arbitrary_nodes() -> impl Strategy<Value = Vec<RawNode>> {
    prop::collection::vec(any::<prop::sample::Index>(), 1..30).prop_map(|parents| {
        let mut nodes = vec![RawNode::new("N0", "")];
        for (i, parent) in parents.iter().enumerate() {
            let child = i + 1;
            nodes.push(RawNode::new(format!("N{child}"), format!("N{}", parent.index(child))));
        }
        nodes
    })
}

proptest! {
    #[test]
    fn prop_unchanged_tree_maps_every_code_to_itself(
        nodes in arbitrary_nodes(),
        backward in any::<bool>(),
    ) {
        let source = Tree::from_nodes("v1", nodes.clone());
        let target = Tree::from_nodes("v2", nodes);
        let direction = MappingDirection::from_backwards_flag(backward);

        for code in source.codes() {
            let resolution = classify(code.as_str(), &source, &target, direction).unwrap();
            prop_assert_eq!(resolution.outcome, OutcomeClass::SingleStable);
            prop_assert_eq!(resolution.sole_candidate(), Some(code));
            prop_assert_eq!(resolution.new_descendants, 0);
        }
    }

    #[test]
    fn prop_added_leaf_refines_its_parent(
        nodes in arbitrary_nodes(),
        pick in any::<prop::sample::Index>(),
    ) {
        let parent = nodes[pick.index(nodes.len())].code.clone();
        let source = Tree::from_nodes("v1", nodes.clone());
        let mut grown = nodes;
        grown.push(RawNode::new("ADDED", parent.clone()));
        let target = Tree::from_nodes("v2", grown);

        let resolution = classify(&parent, &source, &target, MappingDirection::Forward).unwrap();
        prop_assert_eq!(resolution.outcome, OutcomeClass::SingleRefined);
        prop_assert_eq!(resolution.new_descendants, 1);
        prop_assert_eq!(resolution.closest_common_ancestor, Some(Code::from(parent.as_str())));
    }
}
