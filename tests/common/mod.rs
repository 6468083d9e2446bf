//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{sse_body, decode_all};
//!
//! let body = sse_body(&["Hello", "World"]);
//! let events = decode_all(&body, 3);
//! ```

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

use ragchat::models::{SearchResult, SearchResultSet};
use ragchat::sse::{DecodeError, DecodedEvent, StreamDecoder};

/// Build a response body with one `data: ` line per payload, each followed
/// by a blank separator line.
pub fn sse_body(payloads: &[&str]) -> Vec<u8> {
    payloads
        .iter()
        .map(|p| format!("data: {}\n\n", p))
        .collect::<String>()
        .into_bytes()
}

/// Wrap search results in the sentinel markers.
#[allow(dead_code)]
pub fn results_payload(results: &[SearchResult]) -> String {
    format!(
        "__SEARCH_RESULTS__{}__END_SEARCH__",
        serde_json::to_string(results).unwrap()
    )
}

#[allow(dead_code)]
pub fn result(content: &str, score: f64, relevant: bool) -> SearchResult {
    SearchResult {
        content: content.to_string(),
        score,
        relevant,
    }
}

/// Outcome of feeding a whole body through one decoder.
#[derive(Debug, PartialEq)]
pub struct Decoded {
    pub events: Vec<DecodedEvent>,
    pub error: Option<DecodeError>,
}

#[allow(dead_code)]
impl Decoded {
    pub fn text(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match e {
                DecodedEvent::AppendText(t) => Some(t.as_str()),
                DecodedEvent::ResultsReady(_) => None,
            })
            .collect()
    }

    pub fn result_sets(&self) -> Vec<&SearchResultSet> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DecodedEvent::ResultsReady(r) => Some(r),
                DecodedEvent::AppendText(_) => None,
            })
            .collect()
    }
}

/// Decode `body` delivered in chunks at the given byte offsets.
pub fn decode_split(body: &[u8], cuts: &[usize]) -> Decoded {
    let mut decoder = StreamDecoder::new();
    let mut events = Vec::new();
    let mut error = None;
    let mut start = 0;

    let ends = cuts.iter().copied().chain(std::iter::once(body.len()));
    for end in ends {
        for item in decoder.push(&body[start..end]) {
            match item {
                Ok(event) => events.push(event),
                Err(e) => error = Some(e),
            }
        }
        start = end;
    }

    if error.is_none() {
        error = decoder.finish().err();
    }
    Decoded { events, error }
}

/// Decode `body` delivered in chunks of `size` bytes.
#[allow(dead_code)]
pub fn decode_all(body: &[u8], size: usize) -> Decoded {
    let cuts: Vec<usize> = (size..body.len()).step_by(size.max(1)).collect();
    decode_split(body, &cuts)
}
