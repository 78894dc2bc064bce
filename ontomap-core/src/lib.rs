//! Core utilities and types shared across all ontomap crates

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, save_config, Config};
pub use error::{OntomapError, OntomapResult};

// Re-export core types
pub use types::{join_codes, Code, MappingDirection, TraversalLimits, VersionInfo};

/// Version information for the ontomap project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
