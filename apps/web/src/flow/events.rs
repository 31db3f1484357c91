//! UI events and the flow that maps each one onto a view-state operation.
//!
//! Events are handled strictly in arrival order: a file change, then a submit,
//! then the response that submit produced. The only await point is the upload.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::FlowError;
use crate::flow::submitter::{submit, UploadClient, UploadPayload};
use crate::flow::validator::{validate, ValidationError};
use crate::flow::view::ViewController;
use crate::models::upload::UploadResponse;

pub enum UiEvent {
    /// The file input changed. `None` when the selection was cleared.
    FileChanged(Option<UploadPayload>),
    Submit,
    Reset,
}

impl UiEvent {
    fn name(&self) -> &'static str {
        match self {
            UiEvent::FileChanged(_) => "file_changed",
            UiEvent::Submit => "submit",
            UiEvent::Reset => "reset",
        }
    }
}

/// One form interaction: the current selection plus the view it drives.
pub struct UploadFlow {
    client: Arc<dyn UploadClient>,
    selection: Option<UploadPayload>,
    view: ViewController,
}

impl UploadFlow {
    pub fn new(client: Arc<dyn UploadClient>) -> Self {
        Self {
            client,
            selection: None,
            view: ViewController::new(),
        }
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub async fn dispatch(&mut self, event: UiEvent) {
        tracing::debug!(event = event.name(), "dispatching ui event");
        match event {
            UiEvent::FileChanged(selection) => self.on_file_changed(selection),
            UiEvent::Submit => self.on_submit().await,
            UiEvent::Reset => self.on_reset(),
        }
    }

    /// Rejects the submission without looking at a selection. Used when the
    /// upload could not even be read, e.g. the request body hit the size cap.
    pub fn reject(&mut self, error: ValidationError) {
        self.fail(FlowError::Validation(error));
    }

    fn on_file_changed(&mut self, selection: Option<UploadPayload>) {
        self.view
            .set_file_name(selection.as_ref().map(|s| s.file.name.clone()));
        self.selection = selection;
    }

    async fn on_submit(&mut self) {
        if let Err(e) = validate(self.selection.as_ref().map(|s| &s.file)) {
            self.fail(e.into());
            return;
        }
        let Some(payload) = self.selection.clone() else {
            return;
        };

        info!(
            file = %payload.file.name,
            size = payload.file.size,
            media_type = %payload.file.media_type,
            "submitting resume"
        );
        self.view.show_loading();

        let outcome = submit(self.client.as_ref(), &payload).await;
        self.on_response(outcome);
    }

    fn on_response(&mut self, outcome: Result<UploadResponse, FlowError>) {
        match outcome {
            Ok(response) => {
                info!(
                    recommendations = response.recommendations.as_ref().map_or(0, Vec::len),
                    total = ?response.total_recommendations,
                    "resume analysed"
                );
                self.view.show_results(&response);
            }
            Err(e) => self.fail(e),
        }
    }

    fn on_reset(&mut self) {
        self.selection = None;
        self.view.reset_form();
    }

    /// Ends the interaction in the Error state.
    pub fn fail(&mut self, error: FlowError) {
        if !matches!(error, FlowError::Validation(_)) {
            warn!("upload failed: {error}");
        }
        self.view.show_error(error.user_message());
    }
}
