//! Extraction of the search results block embedded in the answer stream.
//!
//! The backend sends its retrieved documents as one `data:` payload of the
//! form `__SEARCH_RESULTS__<json array>__END_SEARCH__`. Both markers are
//! always in the same payload; a block is never split across lines, so a
//! missing end marker is an error rather than a reason to wait for more data.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::SearchResultSet;
use crate::sse::events::{DecodeError, EventPayload};

/// Marker opening a search results block
pub const START_MARKER: &str = "__SEARCH_RESULTS__";
/// Marker closing a search results block
pub const END_MARKER: &str = "__END_SEARCH__";

/// Captures everything between the start marker and the last end marker.
static SEARCH_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?s)^{}(.*){}",
        regex::escape(START_MARKER),
        regex::escape(END_MARKER)
    ))
    .expect("Invalid search block regex")
});

/// Classify a `data:` payload as answer text or a search results block.
///
/// Text payloads are returned untouched, including leading and trailing
/// whitespace.
pub fn extract_payload(payload: &str) -> Result<EventPayload, DecodeError> {
    if !payload.starts_with(START_MARKER) {
        return Ok(EventPayload::TextFragment(payload.to_string()));
    }

    let raw = SEARCH_BLOCK_REGEX
        .captures(payload)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| DecodeError::MalformedStructuredBlock {
            payload: payload.to_string(),
        })?;

    serde_json::from_str::<SearchResultSet>(raw)
        .map(EventPayload::StructuredBlock)
        .map_err(|e| DecodeError::StructuredPayload {
            raw: raw.to_string(),
            message: e.to_string(),
        })
}
