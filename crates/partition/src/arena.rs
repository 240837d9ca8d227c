//! Dense index arena for node identifiers.
//!
//! Maps each distinct identifier to a stable `usize` in `0..len()` and back.
//! Every internal step of a run works on these indices and translates back to
//! identifiers only when producing output.
//!
//! # Invariants
//!
//! 1. **Bijective:** `index_of(node(i)) == Some(i)` for every `i < len()`.
//! 2. **Stable:** indices are assigned in first-seen order and never change.
//! 3. **No duplicates:** interning an identifier twice returns the same index.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::PartitionError;

#[derive(Debug, Clone)]
pub struct NodeArena<K> {
    nodes: Vec<K>,
    index: FxHashMap<K, usize>,
}

impl<K> Default for NodeArena<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<K> NodeArena<K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an arena from a universe. Repeated identifiers collapse to one entry.
    pub fn from_universe<I>(universe: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut arena = Self::new();
        for node in universe {
            arena.intern(node);
        }
        arena
    }

    /// Return the index of `node`, assigning the next free index if unseen.
    pub fn intern(&mut self, node: K) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(node.clone(), idx);
        self.nodes.push(node);
        idx
    }

    pub fn index_of(&self, node: &K) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub fn node(&self, idx: usize) -> &K {
        &self.nodes[idx]
    }

    pub fn nodes(&self) -> &[K] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve both ends of a relation pair to indices.
    ///
    /// Fails with `UnknownNode` on the first end that is not in the arena.
    pub fn resolve_pair(
        &self,
        pair: &(K, K),
        pair_index: usize,
    ) -> Result<(usize, usize), PartitionError> {
        let lookup = |node: &K| {
            self.index_of(node).ok_or_else(|| PartitionError::UnknownNode {
                node: format!("{node:?}"),
                pair_index,
            })
        };
        Ok((lookup(&pair.0)?, lookup(&pair.1)?))
    }

    /// Resolve every pair, failing fast on the first unknown node.
    pub fn resolve_all(&self, relation: &[(K, K)]) -> Result<Vec<(usize, usize)>, PartitionError> {
        relation
            .iter()
            .enumerate()
            .map(|(i, pair)| self.resolve_pair(pair, i))
            .collect()
    }
}
