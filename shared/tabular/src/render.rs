//! Canonical CSV Renderer
//!
//! Serializes a header/rows table back into delimited text for the
//! spreadsheet path. Same dialect as the text-input parser: comma delimiter,
//! double-quote quoting with `""` escapes, CRLF record terminator.

use csv::{Terminator, WriterBuilder};

use crate::error::TabularError;

/// Render headers then data rows as one CSV record each.
///
/// An empty table renders as the empty string rather than a lone blank
/// record.
pub fn render_csv(headers: &[String], rows: &[Vec<String>]) -> Result<String, TabularError> {
    if headers.is_empty() {
        return Ok(String::new());
    }

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(headers)
        .map_err(|e| TabularError::Render(e.to_string()))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| TabularError::Render(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TabularError::Render(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TabularError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(row: &[&str]) -> Vec<String> {
        row.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn test_renders_crlf_records() {
        let csv = render_csv(
            &strings(&["Name", "Age"]),
            &[strings(&["Alice", "30"])],
        )
        .unwrap();

        assert_eq!(csv, "Name,Age\r\nAlice,30\r\n");
    }

    #[test]
    fn test_empty_table_renders_empty_string() {
        assert_eq!(render_csv(&[], &[]).unwrap(), "");
    }

    #[test]
    fn test_fields_with_delimiters_and_quotes_are_escaped() {
        let csv = render_csv(
            &strings(&["col"]),
            &[
                strings(&["a,b"]),
                strings(&["say \"hi\""]),
                strings(&["line\nbreak"]),
            ],
        )
        .unwrap();

        assert_eq!(
            csv,
            "col\r\n\"a,b\"\r\n\"say \"\"hi\"\"\"\r\n\"line\nbreak\"\r\n"
        );
    }
}
