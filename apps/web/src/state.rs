use std::sync::Arc;

use crate::config::Config;
use crate::flow::submitter::UploadClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Client for the analysis service. `HttpUploadClient` in production.
    pub upload_client: Arc<dyn UploadClient>,
}
