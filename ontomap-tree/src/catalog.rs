/// Version listing with release dates, used to pick the mapping direction
use chrono::NaiveDate;
use ontomap_core::{MappingDirection, OntomapError, OntomapResult, VersionInfo};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct VersionCatalog {
    versions: Vec<VersionInfo>,
}

impl VersionCatalog {
    pub fn new(mut versions: Vec<VersionInfo>) -> Self {
        versions.sort_by(|a, b| {
            a.release_date
                .cmp(&b.release_date)
                .then_with(|| a.api_identifier.cmp(&b.api_identifier))
        });
        Self { versions }
    }

    pub fn get(&self, identifier: &str) -> Option<&VersionInfo> {
        self.versions.iter().find(|v| v.api_identifier == identifier)
    }

    /// Oldest first
    pub fn versions(&self) -> &[VersionInfo] {
        &self.versions
    }

    pub fn latest(&self) -> Option<&VersionInfo> {
        self.versions.last()
    }

    pub fn release_date(&self, identifier: &str) -> OntomapResult<NaiveDate> {
        self.get(identifier)
            .map(|v| v.release_date)
            .ok_or_else(|| {
                OntomapError::NotFound(format!("{} is not a known ontology version", identifier))
            })
    }

    /// Forward when the target is released on or after the source, backward otherwise
    pub fn direction(&self, source: &str, target: &str) -> OntomapResult<MappingDirection> {
        let source_date = self.release_date(source)?;
        let target_date = self.release_date(target)?;
        if source == target {
            return Err(OntomapError::InvalidInput(format!(
                "source and target versions are both {}, nothing to translate",
                source
            )));
        }

        let direction = MappingDirection::from_backwards_flag(target_date < source_date);
        debug!(source, target, %direction, "mapping direction from release dates");
        Ok(direction)
    }
}
