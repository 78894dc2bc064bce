#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use ontomap_test::fixtures::{sample_records, LATEST_VERSION, ORIGINAL_VERSION};
use ontomap_test::TreeDir;
use std::path::{Path, PathBuf};

pub fn ontomap_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ontomap").unwrap();
    // keep test output free of user configuration and log settings
    cmd.env_remove("ONTOMAP_CONFIG")
        .env_remove("ONTOMAP_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Fixture trees plus a sample record file, all in one temp directory
pub struct TestEnvironment {
    pub trees: TreeDir,
    pub input: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let trees = TreeDir::with_fixture_trees()?;
        let input = trees.write_file("data_clinical_sample.txt", &sample_records())?;
        Ok(Self { trees, input })
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.trees.path().join(name)
    }

    pub fn tree_dir(&self) -> &Path {
        self.trees.path()
    }

    /// `translate` from the original fixture version to the latest one
    pub fn translate_forward(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = ontomap_cmd();
        cmd.arg("translate")
            .arg("-i")
            .arg(input)
            .arg("-o")
            .arg(output)
            .arg("-s")
            .arg(ORIGINAL_VERSION)
            .arg("-t")
            .arg(LATEST_VERSION)
            .arg("--trees")
            .arg(self.tree_dir());
        cmd
    }
}

/// Data rows of a written record file, split into fields
pub fn data_rows(content: &str) -> Vec<Vec<String>> {
    content
        .lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .skip(1)
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}
