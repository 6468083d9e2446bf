//! Event line framing.
//!
//! Only lines starting with exactly `data: ` carry content. Everything else
//! (blank separators, `: keep-alive` comments, `event:` lines, `data:` with no
//! space) is framing and produces nothing.

use crate::sse::events::{DecodeError, EventPayload};
use crate::sse::markers::extract_payload;

/// Prefix of a content-carrying line
pub const DATA_PREFIX: &str = "data: ";

/// A single logical line of the response, by role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLine<'a> {
    /// Payload of a `data: ` line, prefix removed
    Data(&'a str),
    /// Framing noise
    Ignored,
}

/// Split a line into its framing role.
pub fn parse_frame_line(line: &str) -> FrameLine<'_> {
    match line.strip_prefix(DATA_PREFIX) {
        Some(payload) => FrameLine::Data(payload),
        None => FrameLine::Ignored,
    }
}

/// Classify a complete line into an event payload.
///
/// Returns `Ok(None)` for framing lines.
pub fn classify_line(line: &str) -> Result<Option<EventPayload>, DecodeError> {
    match parse_frame_line(line) {
        FrameLine::Data(payload) => extract_payload(payload).map(Some),
        FrameLine::Ignored => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_prefix_is_stripped() {
        assert_eq!(parse_frame_line("data: Hello"), FrameLine::Data("Hello"));
        assert_eq!(parse_frame_line("data: "), FrameLine::Data(""));
        assert_eq!(parse_frame_line("data:  two"), FrameLine::Data(" two"));
    }

    #[test]
    fn test_framing_lines_are_ignored() {
        assert_eq!(parse_frame_line(""), FrameLine::Ignored);
        assert_eq!(parse_frame_line(": keep-alive"), FrameLine::Ignored);
        assert_eq!(parse_frame_line("event: message"), FrameLine::Ignored);
        assert_eq!(parse_frame_line("data:no-space"), FrameLine::Ignored);
        assert_eq!(parse_frame_line(" data: indented"), FrameLine::Ignored);
        assert_eq!(parse_frame_line("DATA: upper"), FrameLine::Ignored);
    }

    #[test]
    fn test_classify_text_line() {
        assert_eq!(
            classify_line("data: Hello ").unwrap(),
            Some(EventPayload::TextFragment("Hello ".to_string()))
        );
    }

    #[test]
    fn test_classify_ignored_line() {
        assert_eq!(classify_line(": comment").unwrap(), None);
    }

    #[test]
    fn test_classify_results_line() {
        assert!(matches!(
            classify_line("data: __SEARCH_RESULTS__[]__END_SEARCH__").unwrap(),
            Some(EventPayload::StructuredBlock(_))
        ));
    }

    #[test]
    fn test_classify_propagates_marker_errors() {
        assert!(matches!(
            classify_line("data: __SEARCH_RESULTS__[").unwrap_err(),
            DecodeError::MalformedStructuredBlock { .. }
        ));
    }

    #[test]
    fn test_marker_on_ignored_line_is_not_an_error() {
        assert_eq!(classify_line("__SEARCH_RESULTS__[").unwrap(), None);
    }
}
