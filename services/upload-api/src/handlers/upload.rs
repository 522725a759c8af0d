//! File Upload Handler
//!
//! Accepts a single-part multipart upload and runs the tabular normalization
//! pipeline over it. The file extension selects the branch: workbook
//! extensions go through per-sheet extraction, everything else is parsed as
//! delimited text.

use axum::{extract::Multipart, http::StatusCode, response::Json};
use sheetflow_tabular::{parse_upload, UploadResult};
use sheetflow_utils::{ApiError, ErrorResponse};
use tracing::info;
use uuid::Uuid;

use super::reject;

/// Upload and normalize one tabular file.
///
/// POST /upload
pub async fn upload_file(
    mut multipart: Multipart,
) -> Result<Json<UploadResult>, (StatusCode, Json<ErrorResponse>)> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| reject(ApiError::invalid_format(format!("invalid upload: {}", e))))?
        .ok_or_else(|| reject(ApiError::invalid_format("no file uploaded")))?;

    let filename = field
        .file_name()
        .map(|name| name.to_string())
        .ok_or_else(|| reject(ApiError::invalid_format("uploaded part has no filename")))?;

    let data = field
        .bytes()
        .await
        .map_err(|e| reject(ApiError::invalid_format(format!("failed to read file: {}", e))))?;

    let upload_id = Uuid::new_v4();
    info!(%upload_id, filename, size_bytes = data.len(), "processing upload");

    let result = parse_upload(&filename, &data).map_err(|e| reject(ApiError::from(e)))?;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request},
        routing::post,
        Router,
    };
    use tower::ServiceExt;

    const BOUNDARY: &str = "sheetflow-test-boundary";

    fn app() -> Router {
        Router::new().route("/upload", post(upload_file))
    }

    fn multipart_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn file_part(filename_attr: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"{filename_attr}\r\n\r\n{content}\r\n--{BOUNDARY}--\r\n"
        )
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_upload_without_file_part_is_invalid_format() {
        let response = app()
            .oneshot(multipart_request(format!("--{BOUNDARY}--\r\n")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "INVALID_FORMAT");
    }

    #[tokio::test]
    async fn test_upload_part_without_filename_is_invalid_format() {
        let response = app()
            .oneshot(multipart_request(file_part("", "a,b\r\n1,2\r\n")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "INVALID_FORMAT");
    }

    #[tokio::test]
    async fn test_upload_csv_returns_text_shape() {
        let part = file_part("; filename=\"data.csv\"", "a,b\r\n1,2\r\n");
        let response = app().oneshot(multipart_request(part)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["type"], "csv_or_text");
        assert_eq!(body["headers"][0], "a");
        assert_eq!(body["headers"][1], "b");
        assert_eq!(body["rows"][0][0], "1");
        assert_eq!(body["rows"][0][1], "2");
        assert!(body.get("csv").is_none());
    }

    #[tokio::test]
    async fn test_upload_corrupt_workbook_is_parse_failure() {
        let part = file_part("; filename=\"broken.xlsx\"", "not a zip container");
        let response = app().oneshot(multipart_request(part)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "PARSE_FAILURE");
    }
}
