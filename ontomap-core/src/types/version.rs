/// Tree version metadata as published by the ontology service
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Identifier used to request the tree, e.g. `oncotree_2019_12_01`
    pub api_identifier: String,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl VersionInfo {
    pub fn new(api_identifier: impl Into<String>, release_date: NaiveDate) -> Self {
        Self {
            api_identifier: api_identifier.into(),
            release_date,
            description: String::new(),
            visible: true,
        }
    }
}
