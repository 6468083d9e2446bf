//! Terminal presentation of answers and retrieved documents.

pub mod document;
pub mod terminal;

pub use document::DocumentView;
pub use terminal::TerminalRenderer;
