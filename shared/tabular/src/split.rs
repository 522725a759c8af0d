//! Table Splitter
//!
//! Partitions a trimmed matrix into a header row and data rows. The header is
//! the first surviving row, kept verbatim even when it is entirely empty
//! strings; data rows are re-checked for emptiness after truncation, since a
//! row whose only value sat beyond the last value-bearing column is empty by
//! the time it arrives here.

use crate::models::TableData;
use crate::trim::Trimmed;

fn row_is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Split a trimmed matrix into `headers` and `rows`.
pub fn split_table(trimmed: Trimmed) -> TableData {
    match trimmed {
        Trimmed::Empty => TableData::default(),
        Trimmed::Matrix(matrix) => {
            let mut rows = matrix.into_iter();
            let headers = rows.next().unwrap_or_default();
            let rows = rows.filter(|row| !row_is_blank(row)).collect();
            TableData { headers, rows }
        }
    }
}
