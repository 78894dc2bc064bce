//! Test utilities for the ontomap workspace
//!
//! Shared fixture trees, temporary tree directories and assertions used by
//! the resolver, report and CLI test suites.

pub mod assertions;
pub mod environment;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::{assert_all_in_tree, assert_codes, assert_header};
pub use environment::TreeDir;
pub use fixtures::{codes, latest_tree, original_tree, LATEST_VERSION, ORIGINAL_VERSION};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (call once per test module)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
