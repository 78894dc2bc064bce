/// Core types shared across all ontomap modules
pub mod code;
pub mod direction;
pub mod version;

// Re-export commonly used types at module level
pub use code::{join_codes, Code};
pub use direction::{MappingDirection, TraversalLimits};
pub use version::VersionInfo;
