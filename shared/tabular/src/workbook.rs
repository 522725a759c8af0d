//! Sheet Orchestration
//!
//! Runs the extract → trim → split → render pipeline: once per worksheet for
//! workbook uploads (in workbook order), or once over the whole file for
//! delimited-text uploads.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};
use tracing::debug;

use crate::error::TabularError;
use crate::extract::{extract_delimited, sheet_matrix, UploadFormat};
use crate::matrix::RawMatrix;
use crate::models::{SheetTable, TableData, UploadResult};
use crate::render::render_csv;
use crate::split::split_table;
use crate::trim::trim_matrix;

/// Normalize one uploaded file, branching on its extension.
pub fn parse_upload(filename: &str, data: &[u8]) -> Result<UploadResult, TabularError> {
    match UploadFormat::from_filename(filename) {
        UploadFormat::Spreadsheet => Ok(UploadResult::Excel {
            sheets: parse_workbook(data)?,
        }),
        UploadFormat::DelimitedText => {
            let table = parse_delimited_table(data)?;
            Ok(UploadResult::TabularText {
                headers: table.headers,
                rows: table.rows,
            })
        }
    }
}

/// Normalize every worksheet of a workbook, in workbook order.
///
/// Every worksheet yields exactly one table; a sheet with an empty used
/// region produces empty headers/rows/csv rather than being omitted.
pub fn parse_workbook(data: &[u8]) -> Result<Vec<SheetTable>, TabularError> {
    let cursor = Cursor::new(data);
    let mut workbook =
        open_workbook_auto_from_rs(cursor).map_err(|e| TabularError::Workbook(e.to_string()))?;

    let names: Vec<String> = workbook.sheet_names().to_vec();
    if names.is_empty() {
        return Err(TabularError::NoSheets);
    }

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let matrix = match workbook.worksheet_range(&name) {
            Some(Ok(range)) => sheet_matrix(&range),
            Some(Err(e)) => return Err(TabularError::Workbook(e.to_string())),
            None => RawMatrix::new(),
        };
        debug!(sheet = %name, rows = matrix.row_count(), "extracted sheet matrix");
        sheets.push(sheet_table(name, matrix)?);
    }
    Ok(sheets)
}

/// Trim, split, and render one extracted sheet matrix.
pub fn sheet_table(name: String, matrix: RawMatrix) -> Result<SheetTable, TabularError> {
    let table = split_table(trim_matrix(matrix));
    let csv = render_csv(&table.headers, &table.rows)?;
    Ok(SheetTable {
        name,
        headers: table.headers,
        rows: table.rows,
        csv,
    })
}

/// Normalize delimited-text content into a canonical table.
pub fn parse_delimited_table(data: &[u8]) -> Result<TableData, TabularError> {
    let matrix = extract_delimited(data)?;
    Ok(split_table(trim_matrix(matrix)))
}
