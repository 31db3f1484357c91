// Upload flow: validate a chosen resume, post it to the analysis service,
// and project the answer into one of four page states.
// The core is page-agnostic; `handlers` and `page` adapt it to HTTP + HTML.

pub mod events;
pub mod handlers;
pub mod page;
pub mod render;
pub mod sources;
pub mod submitter;
pub mod validator;
pub mod view;
