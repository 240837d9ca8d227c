//! Connected components of an undirected relation.
//!
//! Pairs are treated as undirected edges, so the relation does not need to be
//! symmetric on input. Grouping runs on a [`DisjointSet`] over arena indices
//! and costs near O(N + E).

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::arena::NodeArena;
use crate::error::PartitionError;
use crate::model::Partition;
use crate::progress::ProgressObserver;
use crate::relation::symmetric_closure;
use crate::union_find::DisjointSet;

/// Partition `universe` into the connected components induced by `relation`.
///
/// Every pair must reference nodes of `universe`; the first pair that does not
/// fails with [`PartitionError::UnknownNode`] and no partition is returned.
/// Nodes that appear in no pair come back as singleton groups. An empty
/// universe yields an empty partition.
pub fn partition<K, I, P>(
    universe: I,
    relation: &[(K, K)],
    observer: &mut P,
) -> Result<Partition<K>, PartitionError>
where
    K: Eq + Hash + Ord + Clone + Debug,
    I: IntoIterator<Item = K>,
    P: ProgressObserver + ?Sized,
{
    let arena = NodeArena::from_universe(universe);
    let edges = arena.resolve_all(relation)?;

    observer.on_start(arena.len(), relation.len());

    let mut sets = DisjointSet::new(arena.len());
    for (u, v) in edges {
        sets.union(u, v);
    }

    let index_groups = sets.groups();
    let found = index_groups.len();

    let groups: Vec<Vec<K>> = index_groups
        .into_iter()
        .map(|members| members.into_iter().map(|i| arena.node(i).clone()).collect())
        .collect();

    let partition = Partition::from_groups(groups);

    // Disjoint-set roots are unique, so normalization must not merge groups
    debug_assert_eq!(partition.len(), found);
    debug_assert_eq!(partition.node_count(), arena.len());

    for (i, group) in partition.iter().enumerate() {
        observer.on_component(i + 1, group.len());
    }
    observer.on_finish(partition.len());

    Ok(partition)
}

/// Partition the nodes named by `pairs`.
///
/// The universe is every identifier on either side of a pair. Pairs are
/// symmetrized before grouping.
pub fn partition_pairs<K, P>(
    pairs: &[(K, K)],
    observer: &mut P,
) -> Result<Partition<K>, PartitionError>
where
    K: Eq + Hash + Ord + Clone + Debug,
    P: ProgressObserver + ?Sized,
{
    let universe: BTreeSet<K> = pairs
        .iter()
        .flat_map(|(a, b)| [a.clone(), b.clone()])
        .collect();
    let symmetric = symmetric_closure(pairs);
    partition(universe, &symmetric, observer)
}
