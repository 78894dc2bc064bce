//! Custom assertions for testing
//!
//! Set comparisons that print both sides in sorted order.

use ontomap_core::{join_codes, Code};
use ontomap_tree::Tree;
use std::collections::BTreeSet;

/// Assert that a code set holds exactly the expected codes
pub fn assert_codes(actual: &BTreeSet<Code>, expected: &[&str]) {
    let expected: BTreeSet<Code> = expected.iter().map(|c| Code::from(*c)).collect();
    assert_eq!(
        actual,
        &expected,
        "got {{{}}}, expected {{{}}}",
        join_codes(actual),
        join_codes(&expected)
    );
}

/// Assert that every code is present in the tree
pub fn assert_all_in_tree(codes: &BTreeSet<Code>, tree: &Tree) {
    let missing: Vec<&Code> = codes.iter().filter(|c| !tree.contains(c.as_str())).collect();
    assert!(
        missing.is_empty(),
        "codes missing from version {}: {:?}",
        tree.version(),
        missing
    );
}

/// Assert that a written table has the expected columns in order
pub fn assert_header(content: &str, expected: &[&str]) {
    let header = content
        .lines()
        .find(|line| !line.starts_with('#') && !line.trim().is_empty())
        .unwrap_or_default();
    let columns: Vec<&str> = header.split('\t').collect();
    assert_eq!(columns, expected, "unexpected header row");
}
