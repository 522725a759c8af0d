//! Arithmetic Handler
//!
//! Small calculator endpoint used by the same frontend as the upload path.
//! Division by zero and unknown operators are client errors.

use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use sheetflow_utils::{ApiError, ErrorResponse};

use super::reject;

#[derive(Debug, Deserialize)]
pub struct CalcRequest {
    pub a: f64,
    pub b: f64,
    pub op: String,
}

#[derive(Debug, Serialize)]
pub struct CalcResponse {
    pub answer: f64,
}

/// Evaluate one binary operation.
///
/// POST /calculate
pub async fn calculate(
    Json(req): Json<CalcRequest>,
) -> Result<Json<CalcResponse>, (StatusCode, Json<ErrorResponse>)> {
    let answer = match req.op.as_str() {
        "+" => req.a + req.b,
        "-" => req.a - req.b,
        "*" => req.a * req.b,
        "/" => {
            if req.b == 0.0 {
                return Err(reject(ApiError::calculation("Division by zero")));
            }
            req.a / req.b
        }
        other => {
            return Err(reject(ApiError::calculation(format!(
                "Unsupported operation: {}",
                other
            ))))
        }
    };

    Ok(Json(CalcResponse { answer }))
}
