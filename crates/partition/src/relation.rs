//! Relation closures over node identifiers.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::arena::NodeArena;
use crate::error::PartitionError;

/// Symmetric closure of `pairs`: every `(a, b)` plus its reverse `(b, a)`.
///
/// The result is deduplicated and sorted ascending, so it does not depend on
/// input order. Self-pairs pass through unchanged.
pub fn symmetric_closure<K>(pairs: &[(K, K)]) -> Vec<(K, K)>
where
    K: Ord + Clone,
{
    let mut closure: BTreeSet<(K, K)> = BTreeSet::new();
    for (a, b) in pairs {
        closure.insert((a.clone(), b.clone()));
        if a != b {
            closure.insert((b.clone(), a.clone()));
        }
    }
    closure.into_iter().collect()
}

/// Reflexive-transitive closure of a directed relation.
///
/// Returns every `(a, b)` where `b` is reachable from `a` by following pairs
/// left to right, including `(a, a)` for each node in `universe`. Output is
/// sorted ascending. Runs an explicit-stack DFS from each node, so the cost is
/// O(N * (N + E)) and deep chains do not recurse.
pub fn reachability_closure<K, I>(
    universe: I,
    relation: &[(K, K)],
) -> Result<Vec<(K, K)>, PartitionError>
where
    K: Eq + Hash + Ord + Clone + Debug,
    I: IntoIterator<Item = K>,
{
    let arena = NodeArena::from_universe(universe);
    let edges = arena.resolve_all(relation)?;

    let n = arena.len();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (u, v) in edges {
        adjacency[u].push(v);
    }

    // seen[v] == source means v was already reached in this pass
    let mut seen = vec![usize::MAX; n];
    let mut stack = Vec::new();
    let mut closure = Vec::new();

    for source in 0..n {
        seen[source] = source;
        stack.push(source);
        while let Some(v) = stack.pop() {
            closure.push((arena.node(source).clone(), arena.node(v).clone()));
            for &w in &adjacency[v] {
                if seen[w] != source {
                    seen[w] = source;
                    stack.push(w);
                }
            }
        }
    }

    closure.sort();
    Ok(closure)
}
