//! Bounding-Box Trimmer
//!
//! Removes fully-empty rows and trailing empty columns from a padded raw
//! matrix. The asymmetry is contractual: leading empty columns are preserved
//! as-is (they become empty-string columns in the output), and rows are only
//! dropped when every cell is empty.

use crate::matrix::{cell_has_value, row_has_value, Cell, RawMatrix};

/// Outcome of trimming: either nothing survived, or a rectangular matrix of
/// strings with no-value cells rendered as the empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum Trimmed {
    Empty,
    Matrix(Vec<Vec<String>>),
}

/// Greatest column index holding a value in any row, scanned over the full
/// padded width.
pub fn last_value_column(rows: &[Vec<Cell>], width: usize) -> Option<usize> {
    (0..width)
        .filter(|&col| rows.iter().any(|row| cell_has_value(&row[col])))
        .last()
}

/// Trim a padded matrix to its value-bearing bounding box.
///
/// 1. Drop fully-empty rows, preserving order.
/// 2. Find the last column with any value across the surviving rows.
/// 3. Truncate every surviving row to that column, inclusive.
pub fn trim_matrix(matrix: RawMatrix) -> Trimmed {
    let width = matrix.width();
    let surviving: Vec<Vec<Cell>> = matrix
        .into_padded_rows()
        .into_iter()
        .filter(|row| row_has_value(row))
        .collect();

    if surviving.is_empty() {
        return Trimmed::Empty;
    }

    let Some(last_col) = last_value_column(&surviving, width) else {
        return Trimmed::Empty;
    };

    let trimmed = surviving
        .into_iter()
        .map(|row| {
            row.into_iter()
                .take(last_col + 1)
                .map(|cell| match cell {
                    Some(text) if !text.trim().is_empty() => text,
                    _ => String::new(),
                })
                .collect()
        })
        .collect();

    Trimmed::Matrix(trimmed)
}
