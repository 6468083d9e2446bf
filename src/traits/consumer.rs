//! Receiver of a decoded answer.

use crate::error::ChatError;
use crate::models::SearchResultSet;
use crate::session::Answer;

/// Something that displays an answer while it streams in.
///
/// Calls arrive in stream order. `on_results` may be called zero, one or
/// several times per answer.
pub trait AnswerConsumer {
    /// The query was sent and nothing has arrived yet.
    fn on_waiting(&mut self) {}

    /// A fragment of answer text, to be appended as-is.
    fn on_text(&mut self, fragment: &str);

    /// The retrieved documents, in ranking order.
    fn on_results(&mut self, results: &SearchResultSet);

    /// The answer failed; anything already shown stays valid.
    fn on_error(&mut self, error: &ChatError);

    /// The answer finished normally.
    fn on_complete(&mut self, _answer: &Answer) {}
}
