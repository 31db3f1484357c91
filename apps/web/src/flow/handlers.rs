use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Html,
};
use tracing::{debug, warn};

use crate::errors::{AppError, FlowError};
use crate::flow::events::{UiEvent, UploadFlow};
use crate::flow::page::render_page;
use crate::flow::submitter::{UploadPayload, RESUME_FIELD};
use crate::flow::validator::ValidationError;
use crate::flow::view::ViewController;
use crate::state::AppState;

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    Ok(Html(render_page(&ViewController::new())?))
}

/// GET /reset
pub async fn handle_reset(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut flow = UploadFlow::new(state.upload_client.clone());
    flow.dispatch(UiEvent::Reset).await;
    Ok(Html(render_page(flow.view())?))
}

/// POST /submit
///
/// Replays the browser's interaction in order: file change, submit, and the
/// upstream response. Always answers with the page in its resulting state.
pub async fn handle_submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut flow = UploadFlow::new(state.upload_client.clone());

    match read_selection(&mut multipart).await {
        Ok(selection) => {
            flow.dispatch(UiEvent::FileChanged(selection)).await;
            flow.dispatch(UiEvent::Submit).await;
        }
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("upload body exceeds the request limit");
            flow.reject(ValidationError::TooLarge);
        }
        Err(e) => flow.fail(FlowError::Transport(e.body_text())),
    }

    debug!(transitions = ?flow.view().history(), "submission finished");
    Ok(Html(render_page(flow.view())?))
}

/// Pulls the `resume` field out of the form. An empty filename means the
/// input was submitted with nothing chosen.
async fn read_selection(
    multipart: &mut Multipart,
) -> Result<Option<UploadPayload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Ok(None);
        }
        let media_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;

        return Ok(Some(UploadPayload::new(file_name, media_type, bytes)));
    }
    Ok(None)
}
