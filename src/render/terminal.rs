//! Line-oriented terminal output for streamed answers.
//!
//! ```text
//! Retrieved documents (2)
//! ────────────────────────────────────────────────────────────
//! Document 1
//!   Score: 0.9132  ✓ Relevant
//!   Ankara, Türkiye'nin başkentidir...
//! ```

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};

use super::document::DocumentView;
use crate::config::DEFAULT_PREVIEW_CHARS;
use crate::error::ChatError;
use crate::models::SearchResultSet;
use crate::session::Answer;
use crate::traits::AnswerConsumer;

const LINE_WIDTH: usize = 60;
const WAITING: &str = "…";

pub mod icons {
    pub const RELEVANT: &str = "✓";
    pub const NOT_RELEVANT: &str = "✗";
}

/// Writes answers to a terminal (or any writer) as they stream in.
///
/// Keeps the documents of the last result set so they can be expanded or
/// collapsed after the answer has finished.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    color: bool,
    preview_chars: usize,
    documents: Vec<DocumentView>,
    line_open: bool,
    typing_indicator: bool,
    waiting: bool,
}

impl TerminalRenderer<io::Stdout> {
    /// Render to stdout with colors and a typing indicator.
    pub fn stdout(preview_chars: usize) -> Self {
        Self::new(io::stdout(), preview_chars)
            .with_color(true)
            .with_typing_indicator(true)
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render to `out` without colors.
    pub fn new(out: W, preview_chars: usize) -> Self {
        Self {
            out,
            color: false,
            preview_chars,
            documents: Vec::new(),
            line_open: false,
            typing_indicator: false,
            waiting: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Show a dim `…` between sending a query and its first event.
    ///
    /// The indicator is erased with terminal escape codes, so only enable
    /// this for a real terminal.
    pub fn with_typing_indicator(mut self, enabled: bool) -> Self {
        self.typing_indicator = enabled;
        self
    }

    pub fn documents(&self) -> &[DocumentView] {
        &self.documents
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Show document `number` (1-based) in full. False if there is no such document.
    pub fn expand(&mut self, number: usize) -> bool {
        self.set_expanded(number, true)
    }

    /// Show document `number` (1-based) as a preview again.
    pub fn collapse(&mut self, number: usize) -> bool {
        self.set_expanded(number, false)
    }

    fn set_expanded(&mut self, number: usize, expanded: bool) -> bool {
        let Some(doc) = number
            .checked_sub(1)
            .and_then(|index| self.documents.get_mut(index))
        else {
            return false;
        };
        if expanded {
            doc.expand();
        } else {
            doc.collapse();
        }
        let doc = doc.clone();
        self.report(|r| r.write_document(number, &doc));
        true
    }

    /// Print a one-line notice, e.g. for an unknown command.
    pub fn notice(&mut self, message: &str) {
        let text = self.paint(message, Color::DarkGrey);
        self.report(|r| {
            r.end_line()?;
            writeln!(r.out, "{}", text)?;
            r.out.flush()
        });
    }

    /// Print an input prompt without a line break.
    pub fn prompt(&mut self, prompt: &str) {
        let text = self.paint(prompt, Color::Yellow);
        self.report(|r| {
            r.end_line()?;
            write!(r.out, "{}", text)?;
            r.out.flush()
        });
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn clear_waiting(&mut self) -> io::Result<()> {
        if self.waiting {
            write!(self.out, "\r")?;
            queue!(self.out, Clear(ClearType::CurrentLine))?;
            self.waiting = false;
        }
        Ok(())
    }

    fn end_line(&mut self) -> io::Result<()> {
        self.clear_waiting()?;
        if self.line_open {
            writeln!(self.out)?;
            self.line_open = false;
        }
        Ok(())
    }

    fn write_results(&mut self) -> io::Result<()> {
        self.end_line()?;
        let header = format!("Retrieved documents ({})", self.documents.len());
        let header = if self.color {
            header.bold().to_string()
        } else {
            header
        };
        writeln!(self.out)?;
        writeln!(self.out, "{}", header)?;
        writeln!(self.out, "{}", "─".repeat(LINE_WIDTH))?;

        for (index, doc) in self.documents.clone().iter().enumerate() {
            self.write_document(index + 1, doc)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn write_document(&mut self, number: usize, doc: &DocumentView) -> io::Result<()> {
        let relevance = if doc.relevant {
            self.paint(&format!("{} Relevant", icons::RELEVANT), Color::Green)
        } else {
            self.paint(&format!("{} Not relevant", icons::NOT_RELEVANT), Color::Red)
        };
        let title = self.paint(&format!("Document {}", number), Color::Cyan);

        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "  Score: {:.4}  {}", doc.score, relevance)?;
        for line in doc.display_text().lines() {
            writeln!(self.out, "  {}", line)?;
        }
        if doc.is_long() {
            let hint = if doc.expanded {
                format!("(:collapse {} to shorten)", number)
            } else {
                format!("(:expand {} for full text)", number)
            };
            let hint = self.paint(&hint, Color::DarkGrey);
            writeln!(self.out, "  {}", hint)?;
        }
        Ok(())
    }

    /// Output failures are logged, not propagated; the answer itself is unaffected.
    fn report(&mut self, write: impl FnOnce(&mut Self) -> io::Result<()>) {
        if let Err(e) = write(self) {
            tracing::warn!(error = %e, "terminal write failed");
        }
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::stdout(DEFAULT_PREVIEW_CHARS)
    }
}

impl<W: Write> AnswerConsumer for TerminalRenderer<W> {
    fn on_waiting(&mut self) {
        if !self.typing_indicator {
            return;
        }
        let text = self.paint(WAITING, Color::DarkGrey);
        self.report(|r| {
            r.end_line()?;
            write!(r.out, "{}", text)?;
            r.waiting = true;
            r.out.flush()
        });
    }

    fn on_text(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        self.report(|r| {
            r.clear_waiting()?;
            write!(r.out, "{}", fragment)?;
            r.line_open = !fragment.ends_with('\n');
            r.out.flush()
        });
    }

    fn on_results(&mut self, results: &SearchResultSet) {
        self.documents = results
            .iter()
            .map(|result| DocumentView::new(result, self.preview_chars))
            .collect();
        self.report(|r| r.write_results());
    }

    fn on_error(&mut self, error: &ChatError) {
        let message = self.paint(&error.user_message(), Color::Red);
        let hint = self.paint(error.recovery_hint(), Color::DarkGrey);
        self.report(|r| {
            r.end_line()?;
            writeln!(r.out, "{}", message)?;
            writeln!(r.out, "  {}", hint)?;
            r.out.flush()
        });
    }

    fn on_complete(&mut self, _answer: &Answer) {
        self.report(|r| {
            r.end_line()?;
            r.out.flush()
        });
    }
}
