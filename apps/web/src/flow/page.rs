//! The host page. Every named region is always present; the four state
//! containers carry `hidden` unless they are the current state.

use askama::Template;

use crate::flow::render::ResultsView;
use crate::flow::validator::{ValidationError, MAX_FILE_SIZE, MIME_DOC, MIME_DOCX, MIME_PDF};
use crate::flow::view::{ScrollTarget, ViewController, ViewState, Visibility};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub file_name: &'a str,
    pub visibility: Visibility,
    pub error_message: &'a str,
    pub results: Option<&'a ResultsView>,
    pub scroll_to_results: bool,
    pub accept: String,
    pub max_file_size: u64,
    /// Media types the page accepts before posting, comma separated.
    pub allowed_types: String,
    pub msg_no_file: String,
    pub msg_too_large: String,
    pub msg_invalid_type: String,
}

impl<'a> IndexPage<'a> {
    pub fn from_view(view: &'a ViewController) -> Self {
        let (error_message, results) = match view.state() {
            ViewState::Error { message } => (message.as_str(), None),
            ViewState::Results(results) => ("", Some(&**results)),
            ViewState::Upload | ViewState::Loading => ("", None),
        };

        Self {
            file_name: view.file_name_display(),
            visibility: view.visibility(),
            error_message,
            results,
            scroll_to_results: view.scroll_target() == ScrollTarget::Results,
            accept: [".pdf", ".doc", ".docx", MIME_PDF, MIME_DOCX, MIME_DOC].join(","),
            max_file_size: MAX_FILE_SIZE,
            allowed_types: [MIME_PDF, MIME_DOCX, MIME_DOC].join(","),
            msg_no_file: ValidationError::NoFile.to_string(),
            msg_too_large: ValidationError::TooLarge.to_string(),
            msg_invalid_type: ValidationError::InvalidType.to_string(),
        }
    }
}

pub fn render_page(view: &ViewController) -> Result<String, askama::Error> {
    IndexPage::from_view(view).render()
}
