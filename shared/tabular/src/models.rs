//! Canonical Table Model
//!
//! Output shapes of the normalization pipeline. `UploadResult` is a closed
//! tagged union so every consumer must handle both source formats explicitly.

use serde::Serialize;

/// A canonical header/rows pair, independent of source format.
///
/// Invariant: `headers.len() == row.len()` for every row; the shared length
/// is the last value-bearing column index plus one, or zero for the empty
/// table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One normalized worksheet, including its canonical CSV rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub csv: String,
}

/// Result of normalizing one uploaded file.
///
/// The text variant deliberately carries no `csv` field: delimited-text input
/// is already CSV, so only spreadsheet sheets are re-rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum UploadResult {
    #[serde(rename = "excel")]
    Excel { sheets: Vec<SheetTable> },

    #[serde(rename = "csv_or_text")]
    TabularText {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}
