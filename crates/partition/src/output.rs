//! Flattening a partition into output rows and writing them as CSV.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::config::OutputConfig;
use crate::error::PartitionError;
use crate::model::{ComponentRow, Partition};

/// Split `node` on the first `separator` into `(source, idi)`.
///
/// Identifiers without the separator get `unknown_source` and keep the whole
/// identifier as the local id.
pub fn split_node<'a>(
    node: &'a str,
    separator: &str,
    unknown_source: &'a str,
) -> (&'a str, &'a str) {
    match node.split_once(separator) {
        Some((source, idi)) => (source, idi),
        None => (unknown_source, node),
    }
}

/// One row per node. Component IDs are zero-based positions in the partition.
pub fn flatten(
    partition: &Partition<String>,
    config: &OutputConfig,
    processed_at: NaiveDateTime,
) -> Vec<ComponentRow> {
    let mut rows = Vec::with_capacity(partition.node_count());
    for (id_unique, group) in partition.iter().enumerate() {
        for node in group {
            let (source, idi) = split_node(node, &config.separator, &config.unknown_source);
            rows.push(ComponentRow {
                id_unique,
                source: source.to_string(),
                idi: idi.to_string(),
                tim_processed: processed_at,
            });
        }
    }
    rows
}

/// Write rows with an `ID_UNIQUE,SOURCE,IDI,TIM_PROCESSED` header.
pub fn write_csv<W: Write>(rows: &[ComponentRow], writer: W) -> Result<(), PartitionError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["ID_UNIQUE", "SOURCE", "IDI", "TIM_PROCESSED"])?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(rows: &[ComponentRow], path: &Path) -> Result<(), PartitionError> {
    let file = std::fs::File::create(path)
        .map_err(|e| PartitionError::Io(format!("cannot create {}: {e}", path.display())))?;
    write_csv(rows, std::io::BufWriter::new(file))
}
