/// Sources that hand back ontology trees and their version listing
use crate::catalog::VersionCatalog;
use crate::tree::{RawNode, Tree};
use ontomap_core::config::SourceConfig;
use ontomap_core::{OntomapError, OntomapResult, VersionInfo};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const VERSIONS_ENDPOINT: &str = "versions";
const TUMOR_TYPES_ENDPOINT: &str = "tumorTypes";
const VERSIONS_FILE: &str = "versions.json";

/// Anything able to produce a tree for a named version
pub trait TreeSource {
    /// Load every node of `version` and build the tree
    fn load_tree(&self, version: &str) -> OntomapResult<Tree>;

    /// All versions this source knows about
    fn versions(&self) -> OntomapResult<Vec<VersionInfo>>;

    /// Version listing wrapped for direction lookups
    fn catalog(&self) -> OntomapResult<VersionCatalog> {
        Ok(VersionCatalog::new(self.versions()?))
    }
}

/// Directory holding `<version>.json` node arrays and a `versions.json` listing
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> OntomapResult<T> {
        if !path.exists() {
            return Err(OntomapError::NotFound(format!("{}", path.display())));
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| OntomapError::Parse(format!("{}: {}", path.display(), e)))
    }
}

impl TreeSource for JsonDirSource {
    fn load_tree(&self, version: &str) -> OntomapResult<Tree> {
        let path = self.dir.join(format!("{}.json", version));
        debug!(path = %path.display(), "loading tree file");
        let nodes: Vec<RawNode> = self.read_json(&path)?;
        let tree = Tree::from_nodes(version, nodes);
        info!(version, nodes = tree.len(), "loaded tree from file");
        Ok(tree)
    }

    fn versions(&self) -> OntomapResult<Vec<VersionInfo>> {
        self.read_json(&self.dir.join(VERSIONS_FILE))
    }
}

/// Blocking client for the ontology web service
pub struct ApiSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ApiSource {
    pub fn new(base_url: &str, timeout: Duration) -> OntomapResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ontomap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OntomapError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &SourceConfig) -> OntomapResult<Self> {
        Self::new(&config.api_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> OntomapResult<T> {
        debug!(url, "requesting");
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| OntomapError::Network(format!("{}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(OntomapError::Network(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| OntomapError::Parse(format!("{}: {}", url, e)))
    }
}

impl TreeSource for ApiSource {
    fn load_tree(&self, version: &str) -> OntomapResult<Tree> {
        let nodes: Vec<RawNode> =
            self.get_json(&self.endpoint(TUMOR_TYPES_ENDPOINT), &[("version", version)])?;
        let tree = Tree::from_nodes(version, nodes);
        info!(version, nodes = tree.len(), "fetched tree from service");
        Ok(tree)
    }

    fn versions(&self) -> OntomapResult<Vec<VersionInfo>> {
        self.get_json(&self.endpoint(VERSIONS_ENDPOINT), &[])
    }
}

/// Pick the file source when a tree directory is configured, the service otherwise
pub fn source_from_config(config: &SourceConfig) -> OntomapResult<Box<dyn TreeSource>> {
    match config.tree_dir.as_deref().filter(|d| !d.is_empty()) {
        Some(dir) => Ok(Box::new(JsonDirSource::new(dir))),
        None => Ok(Box::new(ApiSource::from_config(config)?)),
    }
}
