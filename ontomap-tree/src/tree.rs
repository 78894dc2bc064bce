/// Read-only node map for a single ontology tree version
use ontomap_core::Code;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

static NO_CODES: BTreeSet<Code> = BTreeSet::new();

/// Node as delivered by a loader, before children are derived
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    pub code: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub precursors: Vec<String>,
    #[serde(default)]
    pub revocations: Vec<String>,
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub main_type: Option<String>,
    #[serde(default)]
    pub tissue: Option<String>,
    #[serde(default)]
    pub level: Option<u32>,
}

impl RawNode {
    pub fn new(code: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            parent: Some(parent.into()),
            ..Default::default()
        }
    }

    pub fn with_history(mut self, codes: &[&str]) -> Self {
        self.history = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_precursors(mut self, codes: &[&str]) -> Self {
        self.precursors = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_revocations(mut self, codes: &[&str]) -> Self {
        self.revocations = codes.iter().map(|c| c.to_string()).collect();
        self
    }
}

/// The three cross-version relations a node can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Codes this node was previously known as
    History,
    /// Older codes merged into this node
    Precursors,
    /// Older codes invalidated and superseded by this node
    Revocations,
}

impl Relation {
    pub const ALL: [Relation; 3] = [Relation::History, Relation::Precursors, Relation::Revocations];

    pub fn name(&self) -> &'static str {
        match self {
            Relation::History => "history",
            Relation::Precursors => "precursors",
            Relation::Revocations => "revocations",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub code: Code,
    pub parent: Option<Code>,
    pub children: BTreeSet<Code>,
    pub precursors: BTreeSet<Code>,
    pub revocations: BTreeSet<Code>,
    pub history: BTreeSet<Code>,
    pub name: String,
    pub main_type: Option<String>,
    pub tissue: Option<String>,
    pub level: Option<u32>,
}

impl Node {
    fn from_raw(raw: RawNode) -> Self {
        Self {
            code: Code::new(raw.code),
            parent: raw.parent.filter(|p| !p.trim().is_empty()).map(Code::new),
            children: BTreeSet::new(),
            precursors: non_blank(raw.precursors),
            revocations: non_blank(raw.revocations),
            history: non_blank(raw.history),
            name: raw.name,
            main_type: raw.main_type,
            tissue: raw.tissue,
            level: raw.level,
        }
    }

    pub fn related(&self, relation: Relation) -> &BTreeSet<Code> {
        match relation {
            Relation::History => &self.history,
            Relation::Precursors => &self.precursors,
            Relation::Revocations => &self.revocations,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

fn non_blank(codes: Vec<String>) -> BTreeSet<Code> {
    codes
        .into_iter()
        .filter(|c| !c.trim().is_empty())
        .map(Code::new)
        .collect()
}

/// One immutable ontology version
#[derive(Debug, Clone)]
pub struct Tree {
    version: String,
    nodes: HashMap<Code, Node>,
    /// foreign code -> codes in this tree listing it, per relation
    reverse: HashMap<Relation, HashMap<Code, BTreeSet<Code>>>,
}

impl Tree {
    /// Build the node map and derive children from parent links in one pass
    pub fn from_nodes(version: impl Into<String>, raw_nodes: impl IntoIterator<Item = RawNode>) -> Self {
        let version = version.into();
        let mut nodes: HashMap<Code, Node> = HashMap::new();

        for raw in raw_nodes {
            let node = Node::from_raw(raw);
            if node.code.is_blank() {
                warn!(version = %version, "skipping node with blank code");
                continue;
            }
            if let Some(previous) = nodes.insert(node.code.clone(), node) {
                warn!(version = %version, code = %previous.code, "duplicate code, keeping the last definition");
            }
        }

        let links: Vec<(Code, Code)> = nodes
            .values()
            .filter_map(|n| n.parent.clone().map(|p| (p, n.code.clone())))
            .collect();
        for (parent, child) in links {
            match nodes.get_mut(&parent) {
                Some(parent_node) => {
                    parent_node.children.insert(child);
                }
                None => debug!(version = %version, code = %child, parent = %parent, "declared parent not in tree"),
            }
        }

        let mut reverse: HashMap<Relation, HashMap<Code, BTreeSet<Code>>> = HashMap::new();
        for relation in Relation::ALL {
            let index = reverse.entry(relation).or_default();
            for node in nodes.values() {
                for foreign in node.related(relation) {
                    index
                        .entry(foreign.clone())
                        .or_default()
                        .insert(node.code.clone());
                }
            }
        }

        debug!(version = %version, nodes = nodes.len(), "tree built");
        Self {
            version,
            nodes,
            reverse,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn get(&self, code: &str) -> Option<&Node> {
        self.nodes.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.nodes.contains_key(code)
    }

    pub fn parent_of(&self, code: &str) -> Option<&Code> {
        self.nodes.get(code).and_then(|n| n.parent.as_ref())
    }

    pub fn children_of(&self, code: &str) -> &BTreeSet<Code> {
        self.nodes.get(code).map(|n| &n.children).unwrap_or(&NO_CODES)
    }

    /// Codes in this tree whose `relation` list contains `foreign`
    pub fn codes_listing(&self, relation: Relation, foreign: &str) -> &BTreeSet<Code> {
        self.reverse
            .get(&relation)
            .and_then(|index| index.get(foreign))
            .unwrap_or(&NO_CODES)
    }

    pub fn listing_in_history(&self, foreign: &str) -> &BTreeSet<Code> {
        self.codes_listing(Relation::History, foreign)
    }

    pub fn listing_in_precursors(&self, foreign: &str) -> &BTreeSet<Code> {
        self.codes_listing(Relation::Precursors, foreign)
    }

    pub fn listing_in_revocations(&self, foreign: &str) -> &BTreeSet<Code> {
        self.codes_listing(Relation::Revocations, foreign)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &Code> {
        self.nodes.keys()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn roots(&self) -> BTreeSet<Code> {
        self.nodes
            .values()
            .filter(|n| n.is_root())
            .map(|n| n.code.clone())
            .collect()
    }
}
