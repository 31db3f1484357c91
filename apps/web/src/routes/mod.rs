pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::flow::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_index))
        .route("/submit", post(handlers::handle_submit))
        .route("/reset", get(handlers::handle_reset))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
    };
    use bytes::Bytes;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::flow::submitter::{RawResponse, SubmitError, UploadClient, UploadPayload};

    const BOUNDARY: &str = "XBOUNDARYX";

    /// Reports the received file back as the experience level.
    struct EchoClient;

    #[async_trait]
    impl UploadClient for EchoClient {
        async fn post_resume(&self, payload: &UploadPayload) -> Result<RawResponse, SubmitError> {
            let body = serde_json::json!({
                "success": true,
                "analysis": {
                    "experience_level": format!("{} ({} bytes)", payload.file.name, payload.file.size),
                    "domains": ["data_science"],
                    "skills": ["python"]
                },
                "recommendations": []
            });
            Ok(RawResponse {
                status: 200,
                body: Bytes::from(body.to_string()),
            })
        }
    }

    fn test_app(max_body_bytes: usize) -> Router {
        build_router(AppState {
            config: Config {
                upstream_url: "http://upstream.invalid".to_string(),
                port: 0,
                max_body_bytes,
                rust_log: "debug".to_string(),
            },
            upload_client: Arc::new(EchoClient),
        })
    }

    fn multipart_request(file_name: &str, content_type: &str, contents: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(contents);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/submit")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn is_hidden(html: &str, id: &str) -> bool {
        html.contains(&format!(r#"id="{id}" hidden"#))
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app(1024)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn test_index_renders_upload_state() {
        let response = test_app(1024)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(!is_hidden(&html, "upload-section"));
        assert!(is_hidden(&html, "results-section"));
    }

    #[tokio::test]
    async fn test_submit_pdf_renders_results() {
        let response = test_app(1024 * 1024)
            .oneshot(multipart_request("cv.pdf", "application/pdf", b"%PDF-1.4 test"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(!is_hidden(&html, "results-section"));
        assert!(is_hidden(&html, "loading-section"));
        assert!(html.contains("cv.pdf (13 bytes)"));
        assert!(html.contains("DATA SCIENCE"));
    }

    #[tokio::test]
    async fn test_submit_wrong_type_renders_error() {
        let response = test_app(1024 * 1024)
            .oneshot(multipart_request("notes.txt", "text/plain", b"hello"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(!is_hidden(&html, "error-section"));
        assert!(html.contains("Invalid file type. Please upload a PDF or DOCX file"));
    }

    #[tokio::test]
    async fn test_submit_without_file_renders_error() {
        let response = test_app(1024 * 1024)
            .oneshot(multipart_request("", "application/octet-stream", b""))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(!is_hidden(&html, "error-section"));
        assert!(html.contains("Please select a file to upload"));
    }

    #[tokio::test]
    async fn test_body_over_limit_renders_size_error() {
        let contents = vec![b'x'; 4096];
        let response = test_app(1024)
            .oneshot(multipart_request("cv.pdf", "application/pdf", &contents))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(!is_hidden(&html, "error-section"));
        assert!(html.contains("File size exceeds 16MB limit"));
    }

    #[tokio::test]
    async fn test_truncated_form_renders_error_page() {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"cv.pdf\"\r\nContent-Type: application/pdf\r\n\r\n%PDF-1.4 cut off"
        );
        let request = Request::post("/submit")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_app(1024 * 1024).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(!is_hidden(&html, "error-section"));
        assert!(is_hidden(&html, "loading-section"));
        assert!(html.contains("Failed to connect to server. Please try again."));
    }

    #[tokio::test]
    async fn test_reset_returns_upload_state_with_placeholder() {
        let response = test_app(1024)
            .oneshot(Request::get("/reset").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(!is_hidden(&html, "upload-section"));
        assert!(is_hidden(&html, "error-section"));
        assert!(html.contains(r#"<span id="file-name">No file selected</span>"#));
    }
}
