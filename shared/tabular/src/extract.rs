//! Cell Matrix Extraction
//!
//! Turns raw upload content into a [`RawMatrix`]. Two variants: worksheet
//! ranges read through `calamine`, and delimited text read through the `csv`
//! crate in flexible mode (ragged records allowed, no header inference).
//!
//! Spreadsheet cells are extracted as their *displayed text*, not their
//! underlying typed value: integer-valued floats render without a decimal
//! point and date cells render as a human-readable date, matching what a
//! spreadsheet viewer would show.

use std::path::Path;

use calamine::{DataType, Range};
use chrono::NaiveTime;

use crate::error::TabularError;
use crate::matrix::{cell_from_text, Cell, RawMatrix};

/// Upload branch, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Spreadsheet,
    DelimitedText,
}

impl UploadFormat {
    /// Workbook extensions take the spreadsheet path; everything else,
    /// including extensionless names, is treated as delimited text.
    pub fn from_filename(filename: &str) -> Self {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("xlsx") | Some("xls") | Some("xlsm") => Self::Spreadsheet,
            _ => Self::DelimitedText,
        }
    }
}

/// Displayed text of one worksheet cell, blank normalized to no-value.
fn cell_display_text(cell: &DataType) -> Cell {
    let text = match cell {
        DataType::Empty => return None,
        DataType::String(s) => s.clone(),
        DataType::Int(i) => i.to_string(),
        DataType::Float(f) => f.to_string(),
        DataType::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        DataType::DateTime(_) => match cell.as_datetime() {
            Some(dt) if dt.time() == NaiveTime::MIN => dt.date().format("%Y-%m-%d").to_string(),
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => cell.to_string(),
        },
        other => other.to_string(),
    };
    cell_from_text(&text)
}

/// Extract the used region of one worksheet as a raw matrix.
///
/// `calamine` ranges are already rectangular, so padding is a no-op here; it
/// still runs so the trimmer sees a uniform width either way.
pub fn sheet_matrix(range: &Range<DataType>) -> RawMatrix {
    let mut matrix = RawMatrix::new();
    for row in range.rows() {
        matrix.push_row(row.iter().map(cell_display_text).collect());
    }
    matrix
}

/// Parse upload content as delimited text, one matrix row per CSV record.
pub fn extract_delimited(data: &[u8]) -> Result<RawMatrix, TabularError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut matrix = RawMatrix::new();
    for record in reader.records() {
        let record = record.map_err(|e| TabularError::Delimited(e.to_string()))?;
        matrix.push_row(record.iter().map(cell_from_text).collect());
    }
    Ok(matrix)
}
