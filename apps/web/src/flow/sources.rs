//! Decoding for the string-encoded `sources` field.
//!
//! Some upstream records carry their source list as a Python list literal
//! (`"['http://a', 'http://b']"`) instead of a JSON array. This module is the only
//! place that knows about that shape.

use tracing::debug;

use crate::models::upload::Sources;

/// Normalizes `sources` to an ordered list of URLs.
pub fn normalize_sources(sources: &Sources) -> Vec<String> {
    match sources {
        Sources::List(urls) => urls.clone(),
        Sources::Encoded(raw) => decode_quoted_list(raw),
    }
}

/// Parses a single-quoted list literal. Falls back to `[raw]` when the string
/// is not a list after swapping quote styles.
pub fn decode_quoted_list(raw: &str) -> Vec<String> {
    let as_json = raw.replace('\'', "\"");
    match serde_json::from_str::<Vec<String>>(&as_json) {
        Ok(urls) => urls,
        Err(e) => {
            debug!("sources string is not a quoted list ({e}); using it as a single url");
            vec![raw.to_string()]
        }
    }
}

/// The link target for a course card: first entry of the normalized list.
pub fn primary_source(sources: Option<&Sources>) -> Option<String> {
    sources
        .map(normalize_sources)
        .and_then(|urls| urls.into_iter().next())
}
