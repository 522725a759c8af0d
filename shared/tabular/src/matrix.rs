//! Raw Cell Matrix
//!
//! Shared cell/row types and emptiness predicates used by every stage of the
//! normalization pipeline. Absent, empty, and whitespace-only text are all
//! treated as "no value".

/// A single cell of a raw matrix: optional text.
pub type Cell = Option<String>;

/// Build a cell from raw text, normalizing blank/whitespace-only to no-value.
pub fn cell_from_text(text: &str) -> Cell {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// True if the cell holds non-blank text.
pub fn cell_has_value(cell: &Cell) -> bool {
    matches!(cell, Some(text) if !text.trim().is_empty())
}

/// True if any cell in the row holds a value.
pub fn row_has_value(row: &[Cell]) -> bool {
    row.iter().any(cell_has_value)
}

/// An ordered, possibly ragged matrix of nullable text cells.
///
/// The matrix tracks the maximum row length observed while rows are pushed;
/// [`RawMatrix::into_padded_rows`] pads every row to that width so trimming
/// always operates over a uniform column count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMatrix {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl RawMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.width = self.width.max(row.len());
        self.rows.push(row);
    }

    /// Maximum row length observed across the matrix.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the matrix, padding every short row with no-value cells so all
    /// rows share the maximum observed length.
    pub fn into_padded_rows(self) -> Vec<Vec<Cell>> {
        let width = self.width;
        self.rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_from_text_normalizes_blank() {
        assert_eq!(cell_from_text("Alice"), Some("Alice".to_string()));
        assert_eq!(cell_from_text(""), None);
        assert_eq!(cell_from_text("   "), None);
        assert_eq!(cell_from_text("\t\n"), None);
    }

    #[test]
    fn test_cell_has_value() {
        assert!(cell_has_value(&Some("x".to_string())));
        assert!(!cell_has_value(&Some("  ".to_string())));
        assert!(!cell_has_value(&None));
    }

    #[test]
    fn test_ragged_rows_pad_to_max_width() {
        let mut matrix = RawMatrix::new();
        matrix.push_row(vec![cell_from_text("a"), cell_from_text("b"), cell_from_text("c")]);
        matrix.push_row(vec![cell_from_text("d"), cell_from_text("e")]);

        assert_eq!(matrix.width(), 3);
        let padded = matrix.into_padded_rows();
        assert_eq!(padded[1], vec![Some("d".to_string()), Some("e".to_string()), None]);
    }
}
