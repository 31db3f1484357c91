//! View-state controller: the single owner of which page region is showing.

use tracing::debug;

use crate::flow::render::{render_results, ResultsView};
use crate::models::upload::UploadResponse;

pub const FILE_NAME_PLACEHOLDER: &str = "No file selected";

/// The mutually exclusive display modes of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Upload,
    Loading,
    Error { message: String },
    Results(Box<ResultsView>),
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Upload => "upload",
            ViewState::Loading => "loading",
            ViewState::Error { .. } => "error",
            ViewState::Results(_) => "results",
        }
    }
}

/// Which of the four state containers is shown. Derived from [`ViewState`],
/// so exactly one flag is ever set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub upload: bool,
    pub loading: bool,
    pub error: bool,
    pub results: bool,
}

impl Visibility {
    pub fn visible_count(&self) -> usize {
        [self.upload, self.loading, self.error, self.results]
            .iter()
            .filter(|v| **v)
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Results,
}

#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
    file_name: Option<String>,
    /// Reset to `Top` on every transition; only results move it.
    scroll: ScrollTarget,
    history: Vec<&'static str>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            state: ViewState::Upload,
            file_name: None,
            scroll: ScrollTarget::Top,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Names of the states entered so far, oldest first.
    pub fn history(&self) -> &[&'static str] {
        &self.history
    }

    pub fn scroll_target(&self) -> ScrollTarget {
        self.scroll
    }

    /// Text for the file-name display; the placeholder when nothing is selected.
    pub fn file_name_display(&self) -> &str {
        self.file_name.as_deref().unwrap_or(FILE_NAME_PLACEHOLDER)
    }

    pub fn set_file_name(&mut self, name: Option<String>) {
        self.file_name = name;
    }

    pub fn visibility(&self) -> Visibility {
        let visibility = Visibility {
            upload: matches!(self.state, ViewState::Upload),
            loading: matches!(self.state, ViewState::Loading),
            error: matches!(self.state, ViewState::Error { .. }),
            results: matches!(self.state, ViewState::Results(_)),
        };
        debug_assert_eq!(visibility.visible_count(), 1);
        visibility
    }

    pub fn show_loading(&mut self) {
        self.transition(ViewState::Loading);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.transition(ViewState::Error {
            message: message.into(),
        });
    }

    pub fn show_results(&mut self, data: &UploadResponse) {
        let view = render_results(data);
        self.transition(ViewState::Results(Box::new(view)));
        self.scroll = ScrollTarget::Results;
    }

    /// Clears the selection and returns to the upload form from any state.
    pub fn reset_form(&mut self) {
        self.file_name = None;
        self.transition(ViewState::Upload);
    }

    fn transition(&mut self, next: ViewState) {
        debug!(from = self.state.name(), to = next.name(), "view transition");
        self.history.push(next.name());
        self.state = next;
        self.scroll = ScrollTarget::Top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exactly_one_visible(view: &ViewController) {
        assert_eq!(view.visibility().visible_count(), 1, "state {:?}", view.state());
    }

    #[test]
    fn test_starts_in_upload_state() {
        let view = ViewController::new();
        assert!(view.visibility().upload);
        assert_eq!(view.file_name_display(), FILE_NAME_PLACEHOLDER);
        assert_exactly_one_visible(&view);
    }

    #[test]
    fn test_exactly_one_region_visible_across_transitions() {
        let mut view = ViewController::new();
        view.show_loading();
        assert!(view.visibility().loading);
        assert_exactly_one_visible(&view);

        view.show_error("boom");
        assert!(view.visibility().error);
        assert_exactly_one_visible(&view);

        view.show_results(&UploadResponse::default());
        assert!(view.visibility().results);
        assert_exactly_one_visible(&view);

        view.reset_form();
        assert!(view.visibility().upload);
        assert_exactly_one_visible(&view);
    }

    #[test]
    fn test_error_carries_message() {
        let mut view = ViewController::new();
        view.show_error("File size exceeds 16MB limit");
        assert_eq!(
            view.state(),
            &ViewState::Error {
                message: "File size exceeds 16MB limit".to_string()
            }
        );
    }

    #[test]
    fn test_results_scrolls_to_results() {
        let mut view = ViewController::new();
        view.show_results(&UploadResponse::default());
        assert_eq!(view.scroll_target(), ScrollTarget::Results);
    }

    #[test]
    fn test_reset_from_any_state_restores_placeholder() {
        for prior in ["upload", "loading", "error", "results"] {
            let mut view = ViewController::new();
            view.set_file_name(Some("cv.pdf".to_string()));
            match prior {
                "loading" => view.show_loading(),
                "error" => view.show_error("x"),
                "results" => view.show_results(&UploadResponse::default()),
                _ => {}
            }
            assert_eq!(view.state().name(), prior);

            view.reset_form();
            assert_eq!(view.state(), &ViewState::Upload);
            assert_eq!(view.file_name_display(), FILE_NAME_PLACEHOLDER);
            assert_eq!(view.scroll_target(), ScrollTarget::Top);
        }
    }
}
