//! Incremental UTF-8 decoding of response chunks.
//!
//! Chunk boundaries can fall inside a multi-byte character. The incomplete
//! tail of a chunk is held back and prefixed to the next one, so callers only
//! ever see whole characters. Bytes that can never form a valid character are
//! replaced with U+FFFD, the same way a browser `TextDecoder` does.

use std::borrow::Cow;

use crate::sse::events::DecodeError;

/// Stateful UTF-8 decoder carrying split characters across chunks
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    /// Start of a character whose remaining bytes have not arrived yet
    pending: Vec<u8>,
}

impl Utf8Decoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a chunk, returning every complete character it finishes.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        let bytes: Cow<'_, [u8]> = if self.pending.is_empty() {
            Cow::Borrowed(chunk)
        } else {
            let mut joined = std::mem::take(&mut self.pending);
            joined.extend_from_slice(chunk);
            Cow::Owned(joined)
        };

        let mut text = String::with_capacity(bytes.len());
        let mut rest: &[u8] = &bytes;

        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    text.push_str(valid);
                    break;
                }
                Err(err) => {
                    let valid_len = err.valid_up_to();
                    text.push_str(&String::from_utf8_lossy(&rest[..valid_len]));

                    match err.error_len() {
                        Some(invalid_len) => {
                            text.push(char::REPLACEMENT_CHARACTER);
                            rest = &rest[valid_len + invalid_len..];
                        }
                        None => {
                            // Input ended mid-character
                            self.pending = rest[valid_len..].to_vec();
                            break;
                        }
                    }
                }
            }
        }

        text
    }

    /// Number of bytes waiting for the rest of their character.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Signal end of input.
    ///
    /// Fails if the stream stopped inside a multi-byte character.
    pub fn finish(self) -> Result<(), DecodeError> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::TextDecoding {
                pending: self.pending,
            })
        }
    }
}
