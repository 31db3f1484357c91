//! Upload submitter: one multipart POST to the analysis service per submission.
//!
//! The HTTP call sits behind [`UploadClient`] so the flow can be driven with a
//! stub in tests. Turning the raw answer into an outcome is the pure
//! [`interpret_response`]. There is no timeout and no retry.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::{FlowError, GENERIC_FAILURE_MESSAGE};
use crate::flow::validator::SelectedFile;
use crate::models::upload::UploadResponse;

pub const UPLOAD_PATH: &str = "/upload";
/// Multipart field the service reads the file from.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A selected file together with its contents.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub file: SelectedFile,
    pub bytes: Bytes,
}

impl UploadPayload {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            file: SelectedFile::new(name, bytes.len() as u64, media_type),
            bytes,
        }
    }
}

/// What came back over the wire, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

#[async_trait]
pub trait UploadClient: Send + Sync {
    async fn post_resume(&self, payload: &UploadPayload) -> Result<RawResponse, SubmitError>;
}

/// reqwest-backed client posting to `{base_url}/upload`.
#[derive(Clone)]
pub struct HttpUploadClient {
    client: Client,
    endpoint: String,
}

impl HttpUploadClient {
    pub fn new(base_url: &str) -> Result<Self, SubmitError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), UPLOAD_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UploadClient for HttpUploadClient {
    async fn post_resume(&self, payload: &UploadPayload) -> Result<RawResponse, SubmitError> {
        let part = Part::bytes(payload.bytes.to_vec())
            .file_name(payload.file.name.clone())
            .mime_str(&payload.file.media_type)?;
        let form = Form::new().part(RESUME_FIELD, part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, len = body.len(), "upload response received");

        Ok(RawResponse { status, body })
    }
}

/// Sends the payload and classifies the result.
pub async fn submit(
    client: &dyn UploadClient,
    payload: &UploadPayload,
) -> Result<UploadResponse, FlowError> {
    let raw = client.post_resume(payload).await.map_err(|e| {
        warn!("upload request failed: {e}");
        FlowError::Transport(e.to_string())
    })?;
    interpret_response(raw.status, &raw.body)
}

/// Classifies an upstream answer.
///
/// - body not JSON → `Transport`
/// - JSON that does not fit [`UploadResponse`] → `Application` (its `error` string if it has one)
/// - 2xx status and `success: true` → `Ok`
/// - anything else → `Application` with the payload's `error`, or the generic message
pub fn interpret_response(status: u16, body: &[u8]) -> Result<UploadResponse, FlowError> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        warn!(status, "upload response is not JSON: {e}");
        FlowError::Transport(format!("unparseable response body: {e}"))
    })?;

    let error_text = value
        .get("error")
        .and_then(|e| e.as_str())
        .map(String::from);

    let response: UploadResponse = match serde_json::from_value(value) {
        Ok(r) => r,
        Err(e) => {
            warn!(status, "upload response has an unexpected shape: {e}");
            return Err(FlowError::Application(failure_message(error_text)));
        }
    };

    if (200..300).contains(&status) && response.success {
        return Ok(response);
    }

    warn!(status, success = response.success, "upload rejected by service");
    Err(FlowError::Application(failure_message(response.error)))
}

fn failure_message(error: Option<String>) -> String {
    error
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}
