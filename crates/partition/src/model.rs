use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A single link loaded from the input table: `left` and `right` denote the
/// same entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkPair {
    pub left: String,
    pub right: String,
}

impl LinkPair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn into_tuple(self) -> (String, String) {
        (self.left, self.right)
    }
}

/// Pre-loaded link pairs for one run.
#[derive(Debug, Clone, Default)]
pub struct LinkInput {
    pub pairs: Vec<LinkPair>,
}

// ---------------------------------------------------------------------------
// Partition
// ---------------------------------------------------------------------------

/// Disjoint groups of node identifiers covering a universe exactly once.
///
/// Each group is sorted ascending and groups are ordered by their first
/// element, so two partitions of the same input compare equal regardless of
/// input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Partition<K> {
    groups: Vec<Vec<K>>,
}

impl<K> Default for Partition<K> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<K: Ord> Partition<K> {
    /// Normalize raw groups: sort members, order groups lexicographically (by
    /// first member when the groups are disjoint), drop empty and repeated
    /// groups.
    pub fn from_groups(groups: Vec<Vec<K>>) -> Self {
        let mut groups: Vec<Vec<K>> = groups
            .into_iter()
            .filter(|g| !g.is_empty())
            .map(|mut g| {
                g.sort();
                g
            })
            .collect();
        groups.sort();
        groups.dedup();
        Self { groups }
    }

    /// Component ID (position in `groups()`) of `node`, if present.
    pub fn component_of(&self, node: &K) -> Option<usize> {
        self.groups
            .iter()
            .position(|g| g.binary_search(node).is_ok())
    }
}

impl<K> Partition<K> {
    pub fn groups(&self) -> &[Vec<K>] {
        &self.groups
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of nodes across all components.
    pub fn node_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[K]> + '_ {
        self.groups.iter().map(Vec::as_slice)
    }
}

// ---------------------------------------------------------------------------
// Output rows
// ---------------------------------------------------------------------------

/// One output row per node: its component, source system, local id and the
/// time the run was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRow {
    #[serde(rename = "ID_UNIQUE")]
    pub id_unique: usize,
    #[serde(rename = "SOURCE")]
    pub source: String,
    #[serde(rename = "IDI")]
    pub idi: String,
    #[serde(rename = "TIM_PROCESSED")]
    pub tim_processed: NaiveDateTime,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSummary {
    pub nodes: usize,
    pub pairs: usize,
    pub closure_pairs: usize,
    pub components: usize,
    pub singletons: usize,
    pub largest_component: usize,
}

impl LinkSummary {
    pub fn compute<K>(partition: &Partition<K>, pairs: usize, closure_pairs: usize) -> Self {
        Self {
            nodes: partition.node_count(),
            pairs,
            closure_pairs,
            components: partition.len(),
            singletons: partition.iter().filter(|g| g.len() == 1).count(),
            largest_component: partition.iter().map(<[K]>::len).max().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkMeta {
    pub engine_version: String,
    pub run_at: String,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkResult {
    pub meta: LinkMeta,
    pub summary: LinkSummary,
    pub groups: Partition<String>,
    #[serde(skip)]
    pub rows: Vec<ComponentRow>,
}
