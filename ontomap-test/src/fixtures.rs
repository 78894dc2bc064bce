//! Fixture trees and records
//!
//! Two small oncology versions that exercise every relation kind:
//! renames (SEZS -> SS, DALL -> DLL, PTCLNOS -> PTCL), merges (CLL and SLL
//! into CLLSLL, CTCL into MYCF), revocations (ALL, GMUCM, PTCL) and codes
//! that disappear outright (TNKL, LEUK, MEL).

use chrono::NaiveDate;
use ontomap_core::{Code, VersionInfo};
use ontomap_tree::{RawNode, Tree};
use std::collections::BTreeSet;

pub const ORIGINAL_VERSION: &str = "oncotree_2018_01_01";
pub const LATEST_VERSION: &str = "oncotree_2019_12_01";

/// Nodes of the older fixture version
pub fn original_nodes() -> Vec<RawNode> {
    vec![
        RawNode::new("TISSUE", ""),
        RawNode::new("LEUK", "TISSUE"),
        RawNode::new("MEL", "TISSUE"),
        RawNode::new("TNKL", "TISSUE"),
        RawNode::new("ALL", "LEUK"),
        RawNode::new("CLL", "LEUK"),
        RawNode::new("TALL", "ALL"),
        RawNode::new("BALL", "ALL"),
        RawNode::new("DALL", "ALL"),
        RawNode::new("GMUCM", "MEL"),
        RawNode::new("SLL", "MEL"),
        RawNode::new("PTCL", "TNKL"),
        RawNode::new("CTCL", "TNKL"),
        RawNode::new("TNKL_CHILD", "TNKL"),
        RawNode::new("PTCLNOS", "PTCL"),
        RawNode::new("SEZS", "CTCL"),
        RawNode::new("FAKE_OLD_SS_CHILD", "SEZS").with_history(&[""]),
        RawNode::new("TNKL_GRANDCHILD", "TNKL_CHILD"),
    ]
}

/// Nodes of the newer fixture version
pub fn latest_nodes() -> Vec<RawNode> {
    vec![
        RawNode::new("TISSUE", ""),
        RawNode::new("BLADDER", "TISSUE"),
        RawNode::new("LNM", "TISSUE"),
        RawNode::new("MTNN", "TISSUE"),
        RawNode::new("URMM", "BLADDER").with_revocations(&["GMUCM"]),
        RawNode::new("CLLSLL", "BLADDER").with_precursors(&["SLL", "CLL"]),
        RawNode::new("BLL", "LNM")
            .with_revocations(&["ALL"])
            .with_precursors(&["BALL"]),
        RawNode::new("TLL", "LNM")
            .with_revocations(&["ALL"])
            .with_precursors(&["TALL"]),
        RawNode::new("DLL", "LNM").with_history(&["DALL"]),
        RawNode::new("SS", "MTNN").with_history(&["SEZS"]),
        RawNode::new("PTCL", "MTNN")
            .with_revocations(&["PTCL"])
            .with_history(&["PTCLNOS"]),
        RawNode::new("MYCF", "MTNN").with_precursors(&["CTCL"]),
        RawNode::new("TNKL_NEW_CHILD", "MTNN").with_history(&[""]),
        RawNode::new("TNKL_NEW_CHILD2", "MTNN").with_history(&[""]),
        RawNode::new("TNKL_CHILD2", "MTNN").with_history(&["TNKL_CHILD"]),
        RawNode::new("FAKE_NEW_SS_CHILD", "SS").with_history(&[""]),
        RawNode::new("FAKE_OLD_SS_CHILD", "SS").with_history(&[""]),
        RawNode::new("TNKL_GRANDCHILD", "TNKL_NEW_CHILD"),
    ]
}

pub fn original_tree() -> Tree {
    Tree::from_nodes(ORIGINAL_VERSION, original_nodes())
}

pub fn latest_tree() -> Tree {
    Tree::from_nodes(LATEST_VERSION, latest_nodes())
}

/// Version listing matching the two fixture trees
pub fn fixture_versions() -> Vec<VersionInfo> {
    vec![
        VersionInfo::new(ORIGINAL_VERSION, date(2018, 1, 1)),
        VersionInfo::new(LATEST_VERSION, date(2019, 12, 1)),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Build a code set from string literals
pub fn codes(items: &[&str]) -> BTreeSet<Code> {
    items.iter().map(|c| Code::from(*c)).collect()
}

/// Clinical sample file coded against the original version
pub fn sample_records() -> String {
    [
        "#Patient Identifier\tSample Identifier\tCancer Type\tOncotree Code",
        "#Identifier of the patient\tIdentifier of the sample\tType\tCode",
        "PATIENT_ID\tSAMPLE_ID\tCANCER_TYPE\tONCOTREE_CODE",
        "P1\tS1\tLeukemia\tDALL",
        "P2\tS2\tLeukemia\tALL",
        "P3\tS3\tLymphoma\tSEZS",
        "P4\tS4\tLymphoma\tTNKL",
        "P5\tS5\tUnknown\tNA",
        "P6\tS6\tUnknown\tNOT_A_CODE",
        "P7\tS7\tLeukemia\tDALL",
    ]
    .join("\n")
        + "\n"
}

/// Records that all resolve to one code with nothing new underneath
pub fn easily_resolved_records() -> String {
    "PATIENT_ID\tONCOTREE_CODE\tAGE\nP1\tDALL\t40\nP2\tCTCL\t51\nP3\tNA\t22\n".to_string()
}
