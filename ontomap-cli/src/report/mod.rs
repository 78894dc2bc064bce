//! Reports produced by the CLI commands

pub mod summary;

pub use summary::MappingSummary;
