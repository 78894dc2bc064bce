//! Ontology tree model, ancestry queries and tree sources

pub mod ancestry;
pub mod catalog;
pub mod loader;
pub mod tree;

pub use ancestry::{ancestor_chain, closest_common_ancestor, descendant_closure};
pub use catalog::VersionCatalog;
pub use loader::{source_from_config, ApiSource, JsonDirSource, TreeSource};
pub use tree::{Node, RawNode, Relation, Tree};
