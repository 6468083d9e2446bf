//! Preview/full-text state of one retrieved document.

use crate::models::SearchResult;

/// Appended to a truncated preview.
pub const ELLIPSIS: &str = "...";

/// A retrieved document as shown in the terminal.
///
/// Long content starts collapsed to a preview of `preview_chars`
/// characters. Toggling never touches the content itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentView {
    pub content: String,
    pub score: f64,
    pub relevant: bool,
    pub expanded: bool,
    preview_chars: usize,
}

impl DocumentView {
    pub fn new(result: &SearchResult, preview_chars: usize) -> Self {
        Self {
            content: result.content.clone(),
            score: result.score,
            relevant: result.relevant,
            expanded: false,
            preview_chars,
        }
    }

    /// Whether the content exceeds the preview length.
    pub fn is_long(&self) -> bool {
        self.content.chars().nth(self.preview_chars).is_some()
    }

    /// Text to show in the current state.
    pub fn display_text(&self) -> String {
        if self.expanded || !self.is_long() {
            return self.content.clone();
        }
        let preview: String = self.content.chars().take(self.preview_chars).collect();
        format!("{}{}", preview, ELLIPSIS)
    }

    /// Switch between preview and full text. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }
}
