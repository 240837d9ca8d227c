//! Loading link pairs from headered CSV.

use crate::config::ColumnConfig;
use crate::error::PartitionError;
use crate::model::LinkPair;

/// Names of required columns that are absent from `headers`, in config order.
pub fn missing_columns(headers: &[String], columns: &ColumnConfig) -> Vec<String> {
    [&columns.left, &columns.right]
        .into_iter()
        .filter(|name| !headers.iter().any(|h| h == *name))
        .cloned()
        .collect()
}

/// Load link pairs from CSV text.
///
/// Both configured columns must be present; otherwise the error names every
/// missing column and no rows are read. Other columns are ignored. An empty
/// cell in either column, or a row too short to reach it, is rejected with its
/// line number.
pub fn load_csv_pairs(
    csv_data: &str,
    columns: &ColumnConfig,
) -> Result<Vec<LinkPair>, PartitionError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let missing = missing_columns(&headers, columns);
    if !missing.is_empty() {
        return Err(PartitionError::InvalidInput { missing });
    }

    let idx = |name: &str| headers.iter().position(|h| h == name).unwrap_or_default();
    let left_idx = idx(&columns.left);
    let right_idx = idx(&columns.right);

    let mut pairs = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

        let cell = |i: usize, column: &str| -> Result<String, PartitionError> {
            let value = record.get(i).unwrap_or("");
            if value.trim().is_empty() {
                return Err(PartitionError::MissingValue {
                    line,
                    column: column.into(),
                });
            }
            Ok(value.to_string())
        };

        pairs.push(LinkPair {
            left: cell(left_idx, &columns.left)?,
            right: cell(right_idx, &columns.right)?,
        });
    }

    log::debug!("loaded {} link pairs", pairs.len());
    Ok(pairs)
}
