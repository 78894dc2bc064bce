//! Classification of a source code's mapping into the target version

use crate::direct::resolve_direct_candidates;
use crate::neighborhood::expand_neighborhood;
use ontomap_core::config::ResolutionConfig;
use ontomap_core::{join_codes, Code, MappingDirection, OntomapResult, TraversalLimits};
use ontomap_tree::{closest_common_ancestor, descendant_closure, Tree};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

pub const GRANULAR_SUFFIX: &str = ", more granular choices introduced";
pub const BLANK_CODE_MESSAGE: &str = "code column blank : use a valid code or \"NA\"";

/// Confidence of a resolution, from certain to impossible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum OutcomeClass {
    /// One candidate, same code, nothing new below it
    SingleStable,
    /// One candidate under a different code, nothing new below it
    SingleRenamed,
    /// One candidate with finer codes introduced below it
    SingleRefined,
    /// Several candidates
    Ambiguous { refined: bool },
    /// No candidate, only a neighborhood to explore
    Unmappable,
    /// Code absent from the source version
    NotRecognized,
}

impl OutcomeClass {
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeClass::SingleStable => "single, stable",
            OutcomeClass::SingleRenamed => "single, renamed",
            OutcomeClass::SingleRefined => "single, refined",
            OutcomeClass::Ambiguous { refined: true } => "ambiguous, refined",
            OutcomeClass::Ambiguous { refined: false } => "ambiguous",
            OutcomeClass::Unmappable => "unmappable",
            OutcomeClass::NotRecognized => "not recognized",
        }
    }

    pub fn is_easily_resolved(&self) -> bool {
        matches!(self, OutcomeClass::SingleStable | OutcomeClass::SingleRenamed)
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything learned about one source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub source_code: Code,
    pub source_version: String,
    pub outcome: OutcomeClass,
    pub candidates: BTreeSet<Code>,
    pub neighborhood: BTreeSet<Code>,
    pub closest_common_ancestor: Option<Code>,
    pub new_descendants: usize,
}

impl Resolution {
    /// Resolution for a code that skips the resolver entirely
    pub fn passthrough(code: Code, source_version: &str) -> Self {
        Self {
            candidates: BTreeSet::from([code.clone()]),
            source_code: code,
            source_version: source_version.to_string(),
            outcome: OutcomeClass::SingleStable,
            neighborhood: BTreeSet::new(),
            closest_common_ancestor: None,
            new_descendants: 0,
        }
    }

    pub fn is_easily_resolved(&self) -> bool {
        self.outcome.is_easily_resolved()
    }

    /// The single candidate, if there is exactly one
    pub fn sole_candidate(&self) -> Option<&Code> {
        match self.candidates.len() {
            1 => self.candidates.iter().next(),
            _ => None,
        }
    }

    /// Human readable summary placed in the options column
    pub fn descriptor(&self) -> String {
        let source = &self.source_code;
        let mut text = match self.outcome {
            OutcomeClass::NotRecognized if source.is_blank() => return BLANK_CODE_MESSAGE.to_string(),
            OutcomeClass::NotRecognized => {
                return format!("{} -> ???, code not in source version {}", source, self.source_version)
            }
            OutcomeClass::SingleStable | OutcomeClass::SingleRenamed => {
                if let Some(code) = self.sole_candidate() {
                    return code.to_string();
                }
                format!("{} -> {{{}}}", source, join_codes(&self.candidates))
            }
            OutcomeClass::Unmappable => {
                format!("{} -> Neighborhood: {}", source, join_codes(&self.neighborhood))
            }
            OutcomeClass::SingleRefined | OutcomeClass::Ambiguous { .. } => {
                format!("{} -> {{{}}}", source, join_codes(&self.candidates))
            }
        };
        if self.new_descendants > 0 {
            text.push_str(GRANULAR_SUFFIX);
        }
        text
    }
}

/// Sentinel codes copied through untouched; the blank code is always one of them
fn passthrough_set<'s, I>(codes: I) -> BTreeSet<Code>
where
    I: IntoIterator<Item = &'s String>,
{
    let mut set: BTreeSet<Code> = codes.into_iter().map(|c| Code::from(c.as_str())).collect();
    set.insert(Code::default());
    set
}

/// Resolves source codes between one pair of trees
#[derive(Debug, Clone)]
pub struct Classifier<'a> {
    source: &'a Tree,
    target: &'a Tree,
    direction: MappingDirection,
    limits: TraversalLimits,
    passthrough: BTreeSet<Code>,
}

impl<'a> Classifier<'a> {
    pub fn new(source: &'a Tree, target: &'a Tree, direction: MappingDirection) -> Self {
        Self {
            source,
            target,
            direction,
            limits: TraversalLimits::default(),
            passthrough: passthrough_set(&ResolutionConfig::default().passthrough_codes),
        }
    }

    pub fn with_limits(mut self, limits: TraversalLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Replace the sentinel codes with the configured ones
    pub fn with_passthrough(mut self, config: &ResolutionConfig) -> Self {
        self.passthrough = passthrough_set(&config.passthrough_codes);
        self
    }

    pub fn is_passthrough(&self, code: &str) -> bool {
        self.passthrough.contains(code)
    }

    pub fn target(&self) -> &'a Tree {
        self.target
    }

    pub fn limits(&self) -> TraversalLimits {
        self.limits
    }

    pub fn classify(&self, source_code: &str) -> OntomapResult<Resolution> {
        if self.is_passthrough(source_code) {
            debug!(code = source_code, "passthrough code");
            return Ok(Resolution::passthrough(Code::from(source_code), self.source.version()));
        }

        let mut resolution = Resolution {
            source_code: Code::from(source_code),
            source_version: self.source.version().to_string(),
            outcome: OutcomeClass::NotRecognized,
            candidates: BTreeSet::new(),
            neighborhood: BTreeSet::new(),
            closest_common_ancestor: None,
            new_descendants: 0,
        };

        let Some(node) = self.source.get(source_code) else {
            debug!(code = source_code, version = self.source.version(), "code not recognized");
            return Ok(resolution);
        };

        resolution.candidates = resolve_direct_candidates(node, self.target, self.direction)?;

        if resolution.candidates.is_empty() {
            let neighborhood = expand_neighborhood(
                [&node.code],
                self.source,
                self.target,
                true,
                self.direction,
                self.limits,
            )?;
            resolution.closest_common_ancestor =
                Some(closest_common_ancestor(&neighborhood, self.target, self.limits)?);
            resolution.neighborhood = neighborhood;
            resolution.outcome = OutcomeClass::Unmappable;
        } else {
            resolution.new_descendants = self.count_new_descendants(&node.code, &resolution.candidates)?;
            let refined = resolution.new_descendants > 0;
            resolution.outcome = match resolution.sole_candidate() {
                Some(only) if refined => {
                    debug!(code = source_code, candidate = %only, "single candidate refined");
                    OutcomeClass::SingleRefined
                }
                Some(only) if only == &node.code => OutcomeClass::SingleStable,
                Some(_) => OutcomeClass::SingleRenamed,
                None => OutcomeClass::Ambiguous { refined },
            };
            if refined {
                resolution.closest_common_ancestor = Some(closest_common_ancestor(
                    &resolution.candidates,
                    self.target,
                    self.limits,
                )?);
            }
        }

        debug!(
            code = source_code,
            outcome = %resolution.outcome,
            candidates = %join_codes(&resolution.candidates),
            "classified"
        );
        Ok(resolution)
    }

    /// Descendants of the candidates in the target that were not below the source code
    fn count_new_descendants(&self, source_code: &Code, candidates: &BTreeSet<Code>) -> OntomapResult<usize> {
        let before = descendant_closure([source_code], self.source, self.limits)?;
        let after = descendant_closure(candidates, self.target, self.limits)?;
        Ok(after.difference(&before).count())
    }
}

/// One-shot classification without keeping a `Classifier` around
pub fn classify(
    source_code: &str,
    source_tree: &Tree,
    target_tree: &Tree,
    direction: MappingDirection,
) -> OntomapResult<Resolution> {
    Classifier::new(source_tree, target_tree, direction).classify(source_code)
}
