use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::flow::validator::ValidationError;

pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to connect to server. Please try again.";
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing your resume";

/// Everything that can end an upload in the Error state. None of these are fatal;
/// the form stays resettable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    /// Rejected locally before any network activity.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Upstream unreachable, or the body was not JSON.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Upstream answered but reported (or implied) failure. Carries the text to show.
    #[error("Application error: {0}")]
    Application(String),
}

impl FlowError {
    /// Text shown in the error region.
    pub fn user_message(&self) -> String {
        match self {
            FlowError::Validation(e) => e.to_string(),
            FlowError::Transport(_) => TRANSPORT_FAILURE_MESSAGE.to_string(),
            FlowError::Application(msg) => msg.clone(),
        }
    }
}

/// Failures of the web front itself, as opposed to the upload outcome.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TEMPLATE_ERROR",
                    "The page could not be rendered".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
