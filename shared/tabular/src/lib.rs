//! Tabular Upload Normalization
//!
//! Converts uploaded spreadsheets and delimited-text files into a canonical
//! rectangular table (headers + rows), trimming the sparse empty regions
//! spreadsheets commonly contain: fully-empty rows, trailing empty columns,
//! and ragged CSV records.

pub mod error;
pub mod extract;
pub mod matrix;
pub mod models;
pub mod render;
pub mod split;
pub mod trim;
pub mod workbook;

pub use error::TabularError;
pub use extract::{extract_delimited, UploadFormat};
pub use matrix::{cell_from_text, cell_has_value, row_has_value, Cell, RawMatrix};
pub use models::{SheetTable, TableData, UploadResult};
pub use render::render_csv;
pub use split::split_table;
pub use trim::{trim_matrix, Trimmed};
pub use workbook::{parse_delimited_table, parse_upload, parse_workbook};
