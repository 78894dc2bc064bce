use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way a translation moves through version history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingDirection {
    /// Source version is older than the target version
    Forward,
    /// Source version is newer than the target version
    Backward,
}

impl MappingDirection {
    pub fn from_backwards_flag(is_backwards: bool) -> Self {
        if is_backwards {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

impl fmt::Display for MappingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

/// Ceilings applied to every tree walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalLimits {
    pub max_depth: usize,
}

impl TraversalLimits {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

impl From<&crate::config::ResolutionConfig> for TraversalLimits {
    fn from(config: &crate::config::ResolutionConfig) -> Self {
        Self::new(config.max_depth)
    }
}
