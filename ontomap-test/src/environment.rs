//! Temporary tree directories with automatic cleanup

use crate::fixtures;
use anyhow::{Context, Result};
use ontomap_tree::RawNode;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Tree directory laid out the way `JsonDirSource` reads it
pub struct TreeDir {
    temp_dir: TempDir,
}

impl TreeDir {
    /// Empty directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::with_prefix("ontomap-test")
            .context("Failed to create temporary directory")?;
        Ok(Self { temp_dir })
    }

    /// Directory holding both fixture versions and their listing
    pub fn with_fixture_trees() -> Result<Self> {
        let dir = Self::new()?;
        dir.write_tree(fixtures::ORIGINAL_VERSION, &fixtures::original_nodes())?;
        dir.write_tree(fixtures::LATEST_VERSION, &fixtures::latest_nodes())?;
        dir.write_versions()?;
        Ok(dir)
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_tree(&self, version: &str, nodes: &[RawNode]) -> Result<PathBuf> {
        let path = self.path().join(format!("{}.json", version));
        let content = serde_json::to_string_pretty(nodes)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn write_versions(&self) -> Result<PathBuf> {
        let path = self.path().join("versions.json");
        let content = serde_json::to_string_pretty(&fixtures::fixture_versions())?;
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write an arbitrary file next to the trees, e.g. an input record file
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
