//! `linkgroup-partition` — equivalence-class partitioning of linked records.
//!
//! Pure engine crate: receives link pairs, returns disjoint groups of node
//! identifiers plus flattened output rows. No CLI dependencies.

pub mod arena;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod output;
pub mod partition;
pub mod progress;
pub mod relation;
pub mod union_find;

pub use config::LinkConfig;
pub use engine::run;
pub use error::PartitionError;
pub use model::{ComponentRow, LinkInput, LinkPair, LinkResult, Partition};
pub use partition::{partition, partition_pairs};
pub use progress::{LogProgress, NoProgress, ProgressObserver};
pub use relation::{reachability_closure, symmetric_closure};
