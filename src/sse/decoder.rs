//! Stream decoder: bytes in, answer events out.
//!
//! Composes [`Utf8Decoder`], [`LineReassembler`] and [`classify_line`]. A
//! decoder belongs to exactly one response; every query gets a fresh one.

use std::collections::VecDeque;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::stream::{self, Stream};
use futures_util::StreamExt;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::{ChatError, TransportError};
use crate::sse::events::{DecodeError, DecodedEvent};
use crate::sse::frame::classify_line;
use crate::sse::lines::LineReassembler;
use crate::sse::text::Utf8Decoder;

/// Lazily decoded answer events.
///
/// Ends after the source is exhausted or after the first error.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<DecodedEvent, ChatError>> + Send>>;

/// Synchronous decoder for one answer stream.
///
/// Feed chunks in arrival order with [`push`](Self::push), then call
/// [`finish`](Self::finish) when the source ends.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    text: Utf8Decoder,
    lines: LineReassembler,
    failed: bool,
}

impl StreamDecoder {
    /// Create a decoder with empty carry-over state
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one chunk.
    ///
    /// Returns the events of every line the chunk completes, in line order.
    /// If a line is malformed the result ends with its error and the decoder
    /// stops: later calls return nothing.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Result<DecodedEvent, DecodeError>> {
        if self.failed {
            return Vec::new();
        }

        let text = self.text.decode(chunk);
        let mut events = Vec::new();

        for line in self.lines.feed(&text) {
            match classify_line(&line) {
                Ok(Some(payload)) => events.push(Ok(payload.into())),
                Ok(None) => {
                    tracing::trace!(len = line.len(), "skipping framing line");
                }
                Err(e) => {
                    self.failed = true;
                    events.push(Err(e));
                    break;
                }
            }
        }

        events
    }

    /// Whether a decode error has already been returned.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// End the stream.
    ///
    /// An unterminated last line is dropped without error. Fails only if the
    /// input stopped inside a multi-byte character.
    pub fn finish(self) -> Result<(), DecodeError> {
        let partial = self.lines.into_remainder();
        if !partial.is_empty() {
            tracing::debug!(len = partial.len(), "discarding unterminated last line");
        }

        if self.failed {
            return Ok(());
        }
        self.text.finish()
    }
}

/// Per-stream state threaded through the unfold.
struct DecodeState<S> {
    source: Pin<Box<S>>,
    decoder: Option<StreamDecoder>,
    pending: VecDeque<Result<DecodedEvent, ChatError>>,
    chunks: u64,
    done: bool,
}

/// Decode a byte stream into answer events.
///
/// One chunk is fully decoded and its events yielded before the next chunk
/// is requested. Dropping the returned stream drops `source`, which closes
/// the underlying response.
pub fn decode<S>(source: S) -> EventStream
where
    S: Stream<Item = Result<Bytes, TransportError>> + Send + 'static,
{
    let span = tracing::debug_span!("answer_stream", stream_id = %Uuid::new_v4());

    let state = DecodeState {
        source: Box::pin(source),
        decoder: Some(StreamDecoder::new()),
        pending: VecDeque::new(),
        chunks: 0,
        done: false,
    };

    let events = stream::unfold(state, move |mut state| {
        async move {
            loop {
                if let Some(item) = state.pending.pop_front() {
                    return Some((item, state));
                }
                if state.done {
                    return None;
                }

                match state.source.next().await {
                    Some(Ok(chunk)) => {
                        state.chunks += 1;
                        let Some(decoder) = state.decoder.as_mut() else {
                            return None;
                        };
                        let events = decoder.push(&chunk);
                        tracing::trace!(
                            chunk = state.chunks,
                            bytes = chunk.len(),
                            events = events.len(),
                            "decoded chunk"
                        );
                        if decoder.is_failed() {
                            state.done = true;
                        }
                        state
                            .pending
                            .extend(events.into_iter().map(|item| item.map_err(ChatError::from)));
                    }
                    Some(Err(e)) => {
                        state.done = true;
                        state.pending.push_back(Err(ChatError::Transport(e)));
                    }
                    None => {
                        tracing::debug!(chunks = state.chunks, "answer stream ended");
                        state.done = true;
                        if let Some(decoder) = state.decoder.take() {
                            if let Err(e) = decoder.finish() {
                                state.pending.push_back(Err(ChatError::Decode(e)));
                            }
                        }
                    }
                }
            }
        }
        .instrument(span.clone())
    });

    Box::pin(events)
}
