use thiserror::Error;

/// Failures raised by the normalization pipeline.
///
/// Every stage fails hard: no retries, no partial tables. The request
/// boundary converts these into transport-level errors.
#[derive(Debug, Error)]
pub enum TabularError {
    #[error("failed to read workbook: {0}")]
    Workbook(String),

    #[error("workbook contains no sheets")]
    NoSheets,

    #[error("failed to parse delimited text: {0}")]
    Delimited(String),

    #[error("failed to render csv: {0}")]
    Render(String),
}
