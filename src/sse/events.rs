//! Event and error types produced by the stream decoder.

use thiserror::Error;

use crate::models::SearchResultSet;

/// Semantic update emitted to the consumer of an answer stream
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedEvent {
    /// A piece of answer text, to be appended verbatim
    AppendText(String),
    /// The retrieved documents for this answer
    ResultsReady(SearchResultSet),
}

impl DecodedEvent {
    /// Returns the event type name as a string for debugging purposes.
    pub fn event_type_name(&self) -> &'static str {
        match self {
            DecodedEvent::AppendText(_) => "append_text",
            DecodedEvent::ResultsReady(_) => "results_ready",
        }
    }
}

/// Classified payload of a single `data: ` line
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// Plain answer text
    TextFragment(String),
    /// Sentinel-delimited search results
    StructuredBlock(SearchResultSet),
}

impl From<EventPayload> for DecodedEvent {
    fn from(payload: EventPayload) -> Self {
        match payload {
            EventPayload::TextFragment(text) => DecodedEvent::AppendText(text),
            EventPayload::StructuredBlock(results) => DecodedEvent::ResultsReady(results),
        }
    }
}

/// Errors that end an answer stream.
///
/// Events emitted before the error stay valid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Start marker present but no end marker in the same payload
    #[error("search results block has no end marker: {payload}")]
    MalformedStructuredBlock { payload: String },

    /// Text between the markers is not a valid search result list
    #[error("invalid search results payload ({message}): {raw}")]
    StructuredPayload { raw: String, message: String },

    /// Stream ended inside a multi-byte character
    #[error("stream ended inside a multi-byte character ({} pending bytes)", .pending.len())]
    TextDecoding { pending: Vec<u8> },
}

impl DecodeError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DecodeError::MalformedStructuredBlock { .. } => "E_DECODE_MARKER",
            DecodeError::StructuredPayload { .. } => "E_DECODE_JSON",
            DecodeError::TextDecoding { .. } => "E_DECODE_UTF8",
        }
    }
}
