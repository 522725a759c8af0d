use serde::{Deserialize, Serialize};
use sheetflow_tabular::TabularError;
use thiserror::Error;

/// Service-level error taxonomy.
///
/// Upload failures are client errors: a bad multipart request is rejected
/// before extraction, and unparseable file content carries the underlying
/// parser's message. Only truly unexpected failures surface as server errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid file format: {message}")]
    InvalidFormat { message: String },

    #[error("Could not parse uploaded file: {message}")]
    ParseFailure { message: String },

    #[error("Calculation error: {message}")]
    Calculation { message: String },

    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    pub fn parse_failure(message: impl Into<String>) -> Self {
        Self::ParseFailure {
            message: message.into(),
        }
    }

    pub fn calculation(message: impl Into<String>) -> Self {
        Self::Calculation {
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "INVALID_FORMAT",
            Self::ParseFailure { .. } => "PARSE_FAILURE",
            Self::Calculation { .. } => "CALCULATION_ERROR",
            Self::Unexpected { .. } => "UNEXPECTED_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidFormat { .. } => 400,
            Self::ParseFailure { .. } => 400,
            Self::Calculation { .. } => 400,
            Self::Unexpected { .. } => 500,
        }
    }
}

impl From<TabularError> for ApiError {
    fn from(error: TabularError) -> Self {
        match error {
            TabularError::Workbook(_) | TabularError::NoSheets | TabularError::Delimited(_) => {
                Self::parse_failure(error.to_string())
            }
            TabularError::Render(_) => Self::unexpected(error.to_string()),
        }
    }
}

/// JSON error envelope returned to clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(error: ApiError) -> Self {
        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabular_errors_map_to_parse_failure() {
        let error = ApiError::from(TabularError::Workbook("bad zip".to_string()));
        assert_eq!(error.error_code(), "PARSE_FAILURE");
        assert_eq!(error.http_status_code(), 400);

        let error = ApiError::from(TabularError::NoSheets);
        assert_eq!(error.http_status_code(), 400);
    }

    #[test]
    fn test_render_errors_are_unexpected() {
        let error = ApiError::from(TabularError::Render("io".to_string()));
        assert_eq!(error.error_code(), "UNEXPECTED_ERROR");
        assert_eq!(error.http_status_code(), 500);
    }

    #[test]
    fn test_error_response_envelope() {
        let response = ErrorResponse::from(ApiError::invalid_format("no file uploaded"));
        assert_eq!(response.code, "INVALID_FORMAT");
        assert!(response.error.contains("no file uploaded"));
    }
}
