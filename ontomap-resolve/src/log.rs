//! Per-code record of how each source code was resolved during a run
use crate::classify::{OutcomeClass, Resolution};
use ontomap_core::Code;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub outcome: OutcomeClass,
    /// Direct candidates in the target version
    pub choices: BTreeSet<Code>,
    /// Mapped relatives, only for unmappable codes
    pub neighbors: BTreeSet<Code>,
    pub closest_common_ancestor: Option<Code>,
    pub new_descendants: usize,
}

impl From<&Resolution> for LogEntry {
    fn from(resolution: &Resolution) -> Self {
        Self {
            outcome: resolution.outcome,
            choices: resolution.candidates.clone(),
            neighbors: resolution.neighborhood.clone(),
            closest_common_ancestor: resolution.closest_common_ancestor.clone(),
            new_descendants: resolution.new_descendants,
        }
    }
}

/// Write-once map from source code to its first resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionLog {
    entries: BTreeMap<Code, LogEntry>,
}

impl ResolutionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the resolution unless the code is already logged. Returns true when stored.
    pub fn record(&mut self, resolution: &Resolution) -> bool {
        if self.entries.contains_key(&resolution.source_code) {
            return false;
        }
        self.entries
            .insert(resolution.source_code.clone(), LogEntry::from(resolution));
        true
    }

    pub fn get(&self, code: &str) -> Option<&LogEntry> {
        self.entries.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Entries in code order
    pub fn iter(&self) -> impl Iterator<Item = (&Code, &LogEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries matching a predicate on the outcome, in code order
    pub fn with_outcome<F>(&self, predicate: F) -> Vec<(&Code, &LogEntry)>
    where
        F: Fn(&OutcomeClass) -> bool,
    {
        self.entries
            .iter()
            .filter(|(_, entry)| predicate(&entry.outcome))
            .collect()
    }

    pub fn count(&self, outcome: OutcomeClass) -> usize {
        self.entries.values().filter(|e| e.outcome == outcome).count()
    }
}
