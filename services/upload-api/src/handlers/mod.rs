pub mod calculate;
pub mod health;
pub mod upload;

pub use calculate::calculate;
pub use health::health_check;
pub use upload::upload_file;

use axum::{http::StatusCode, response::Json};
use sheetflow_utils::{ApiError, ErrorResponse};

/// Convert a service error into a transport-level rejection.
pub(crate) fn reject(error: ApiError) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(error)))
}
