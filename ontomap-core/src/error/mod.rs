//! Core error types for ontomap

use thiserror::Error;

/// Main error type for ontomap operations
#[derive(Error, Debug)]
pub enum OntomapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Two target nodes claim the same source code as their history.
    /// The target version contradicts itself, so the run must stop.
    #[error(
        "Target version has multiple codes with {source_code} in history: {}",
        targets.join(", ")
    )]
    ConflictingHistory {
        source_code: String,
        targets: Vec<String>,
    },

    #[error("Code {code} is not present in tree version {version}")]
    MissingCode { code: String, version: String },

    #[error("Cycle detected while walking the tree at code {code}")]
    CycleDetected { code: String },

    #[error("{operation} exceeded the maximum depth of {limit} starting from {code}")]
    DepthExceeded {
        operation: &'static str,
        code: String,
        limit: usize,
    },

    #[error("No related code of {code} maps into the target version")]
    NeighborhoodExhausted { code: String },

    #[error("Codes share no common ancestor: {}", codes.join(", "))]
    NoCommonAncestor { codes: Vec<String> },

    #[error("Other error: {0}")]
    Other(String),
}

impl OntomapError {
    /// Tree consistency problems, as opposed to bad input or I/O.
    pub fn is_consistency_error(&self) -> bool {
        matches!(
            self,
            OntomapError::ConflictingHistory { .. }
                | OntomapError::MissingCode { .. }
                | OntomapError::CycleDetected { .. }
                | OntomapError::DepthExceeded { .. }
                | OntomapError::NeighborhoodExhausted { .. }
                | OntomapError::NoCommonAncestor { .. }
        )
    }
}

/// Result type alias for ontomap operations
pub type OntomapResult<T> = Result<T, OntomapError>;

// Conversion implementations for common error types
impl From<serde_json::Error> for OntomapError {
    fn from(err: serde_json::Error) -> Self {
        OntomapError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for OntomapError {
    fn from(err: anyhow::Error) -> Self {
        OntomapError::Other(err.to_string())
    }
}
