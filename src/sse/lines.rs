//! Line reassembly across chunk boundaries.

/// Splits decoded text into `\n`-terminated lines.
///
/// Text after the last `\n` is held until a later chunk terminates it. A
/// remainder still held when the stream ends is never surfaced as a line.
/// Carriage returns are kept as ordinary characters.
#[derive(Debug, Default)]
pub struct LineReassembler {
    remainder: String,
}

impl LineReassembler {
    /// Create an empty reassembler
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text and return every line it completes, in order.
    ///
    /// Returned lines do not include their terminating `\n`.
    pub fn feed(&mut self, text: &str) -> Vec<String> {
        // Only the new text can hold a newline; the remainder never does.
        let Some(offset) = text.rfind('\n') else {
            self.remainder.push_str(text);
            return Vec::new();
        };
        let last_newline = self.remainder.len() + offset;
        self.remainder.push_str(text);

        let tail = self.remainder.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.remainder, tail);

        complete.split_terminator('\n').map(str::to_owned).collect()
    }

    /// Text received since the last line boundary.
    pub fn remainder(&self) -> &str {
        &self.remainder
    }

    /// Consume the reassembler, returning the unterminated remainder.
    pub fn into_remainder(self) -> String {
        self.remainder
    }
}
