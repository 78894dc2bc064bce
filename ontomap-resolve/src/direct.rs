//! Direct mapping of one code through the cross-version relations
//!
//! Each direction is an ordered chain of named strategies. Forward chains
//! stop at the first strategy that finds anything; backward chains keep
//! collecting, and a later strategy may look at what earlier ones found.

use ontomap_core::{Code, MappingDirection, OntomapError, OntomapResult};
use ontomap_tree::{Node, Tree};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// A single lookup rule from a source node into the target tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Target nodes listing the source code in their history. At most one may exist.
    SuccessorHistory,
    /// Target nodes listing the source code as a precursor
    SuccessorPrecursors,
    /// Target nodes listing the source code as revoked
    SuccessorRevocations,
    /// The source code itself, when the target still has it
    CarriedForward,
    /// The source node's own history entries present in the target
    PredecessorHistory,
    /// The source code itself, only if nothing was found so far
    SelfIfUnmatched,
    /// The source node's own precursors present in the target
    PredecessorPrecursors,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::SuccessorHistory => "successor-history",
            Strategy::SuccessorPrecursors => "successor-precursors",
            Strategy::SuccessorRevocations => "successor-revocations",
            Strategy::CarriedForward => "carried-forward",
            Strategy::PredecessorHistory => "predecessor-history",
            Strategy::SelfIfUnmatched => "self-if-unmatched",
            Strategy::PredecessorPrecursors => "predecessor-precursors",
        }
    }

    /// Codes this rule contributes, given what the chain has found so far
    pub fn apply(
        &self,
        source: &Node,
        target: &Tree,
        found: &BTreeSet<Code>,
    ) -> OntomapResult<BTreeSet<Code>> {
        let code = source.code.as_str();
        let matches = match self {
            Strategy::SuccessorHistory => {
                let successors = target.listing_in_history(code);
                if successors.len() > 1 {
                    return Err(OntomapError::ConflictingHistory {
                        source_code: code.to_string(),
                        targets: successors.iter().map(|c| c.to_string()).collect(),
                    });
                }
                successors.clone()
            }
            Strategy::SuccessorPrecursors => target.listing_in_precursors(code).clone(),
            Strategy::SuccessorRevocations => target.listing_in_revocations(code).clone(),
            Strategy::CarriedForward => present_in(target, [&source.code]),
            Strategy::PredecessorHistory => present_in(target, &source.history),
            Strategy::SelfIfUnmatched if found.is_empty() => present_in(target, [&source.code]),
            Strategy::SelfIfUnmatched => BTreeSet::new(),
            Strategy::PredecessorPrecursors => present_in(target, &source.precursors),
        };
        Ok(matches)
    }
}

fn present_in<'a>(tree: &Tree, codes: impl IntoIterator<Item = &'a Code>) -> BTreeSet<Code> {
    codes
        .into_iter()
        .filter(|c| tree.contains(c.as_str()))
        .cloned()
        .collect()
}

/// How a chain merges strategy results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// Return the first non-empty result
    FirstMatch,
    /// Union every result
    Accumulate,
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyChain {
    pub combine: Combine,
    pub strategies: &'static [Strategy],
}

impl StrategyChain {
    pub const FORWARD: StrategyChain = StrategyChain {
        combine: Combine::FirstMatch,
        strategies: &[
            Strategy::SuccessorHistory,
            Strategy::SuccessorPrecursors,
            Strategy::SuccessorRevocations,
            Strategy::CarriedForward,
        ],
    };

    // Revocations are never followed backward: a revoked code is not a valid past equivalent
    pub const BACKWARD: StrategyChain = StrategyChain {
        combine: Combine::Accumulate,
        strategies: &[
            Strategy::PredecessorHistory,
            Strategy::SelfIfUnmatched,
            Strategy::PredecessorPrecursors,
        ],
    };

    pub fn for_direction(direction: MappingDirection) -> &'static StrategyChain {
        match direction {
            MappingDirection::Forward => &Self::FORWARD,
            MappingDirection::Backward => &Self::BACKWARD,
        }
    }

    pub fn resolve(&self, source: &Node, target: &Tree) -> OntomapResult<BTreeSet<Code>> {
        let mut found = BTreeSet::new();
        for strategy in self.strategies {
            let matches = strategy.apply(source, target, &found)?;
            if matches.is_empty() {
                continue;
            }
            trace!(
                code = %source.code,
                strategy = strategy.name(),
                matched = matches.len(),
                "strategy matched"
            );
            match self.combine {
                Combine::FirstMatch => {
                    if *strategy == Strategy::SuccessorPrecursors
                        && !target.listing_in_revocations(source.code.as_str()).is_empty()
                    {
                        debug!(
                            code = %source.code,
                            "code is both a precursor and a revocation in the target, keeping precursor matches"
                        );
                    }
                    return Ok(matches);
                }
                Combine::Accumulate => found.extend(matches),
            }
        }
        Ok(found)
    }
}

/// Target codes the source node maps to without looking at any neighbor
pub fn resolve_direct_candidates(
    source_node: &Node,
    target_tree: &Tree,
    direction: MappingDirection,
) -> OntomapResult<BTreeSet<Code>> {
    StrategyChain::for_direction(direction).resolve(source_node, target_tree)
}
