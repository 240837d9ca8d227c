use std::collections::BTreeSet;
use std::time::Instant;

use crate::config::LinkConfig;
use crate::error::PartitionError;
use crate::loader::load_csv_pairs;
use crate::model::{LinkInput, LinkMeta, LinkPair, LinkResult, LinkSummary};
use crate::output::flatten;
use crate::partition::partition;
use crate::progress::ProgressObserver;
use crate::relation::symmetric_closure;

/// Run the full pipeline on pre-loaded pairs: symmetric closure, partition,
/// then flatten into output rows stamped with one processing time.
pub fn run<P>(
    config: &LinkConfig,
    input: &LinkInput,
    observer: &mut P,
) -> Result<LinkResult, PartitionError>
where
    P: ProgressObserver + ?Sized,
{
    let started = Instant::now();

    let pairs: Vec<(String, String)> = input
        .pairs
        .iter()
        .cloned()
        .map(LinkPair::into_tuple)
        .collect();

    let universe: BTreeSet<String> = pairs
        .iter()
        .flat_map(|(a, b)| [a.clone(), b.clone()])
        .collect();

    let symmetric = symmetric_closure(&pairs);
    log::debug!(
        "symmetric closure: {} pairs -> {} pairs over {} nodes",
        pairs.len(),
        symmetric.len(),
        universe.len()
    );

    let groups = partition(universe, &symmetric, observer)?;

    let processed_at = chrono::Local::now();
    let rows = flatten(&groups, &config.output, processed_at.naive_local());
    let summary = LinkSummary::compute(&groups, pairs.len(), symmetric.len());

    let elapsed = started.elapsed();
    log::info!(
        "partitioned {} nodes into {} components in {:.2}s",
        summary.nodes,
        summary.components,
        elapsed.as_secs_f64()
    );

    Ok(LinkResult {
        meta: LinkMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: processed_at.to_rfc3339(),
            elapsed_ms: elapsed.as_millis() as u64,
        },
        summary,
        groups,
        rows,
    })
}

/// Load pairs from CSV text per `config.columns`, then [`run`].
pub fn run_csv<P>(
    config: &LinkConfig,
    csv_data: &str,
    observer: &mut P,
) -> Result<LinkResult, PartitionError>
where
    P: ProgressObserver + ?Sized,
{
    let pairs = load_csv_pairs(csv_data, &config.columns)?;
    run(config, &LinkInput { pairs }, observer)
}
