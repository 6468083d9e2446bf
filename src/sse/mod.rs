//! Answer stream decoding.
//!
//! The answer service streams its reply as server-sent event lines:
//! - `data: <text>` - a fragment of the answer, appended verbatim
//! - `data: __SEARCH_RESULTS__<json>__END_SEARCH__` - the retrieved documents
//! - anything else (blank lines, `: comments`) - framing, ignored
//!
//! # Module structure
//! - `events` - DecodedEvent, EventPayload and DecodeError
//! - `text` - incremental UTF-8 decoding across chunk boundaries
//! - `lines` - line reassembly across chunk boundaries
//! - `frame` - `data: ` prefix handling
//! - `markers` - search results block extraction
//! - `decoder` - StreamDecoder and the async `decode` adapter

mod decoder;
mod events;
mod frame;
mod lines;
mod markers;
mod text;

pub use decoder::{decode, EventStream, StreamDecoder};
pub use events::{DecodeError, DecodedEvent, EventPayload};
pub use frame::{classify_line, parse_frame_line, FrameLine, DATA_PREFIX};
pub use lines::LineReassembler;
pub use markers::{extract_payload, END_MARKER, START_MARKER};
pub use text::Utf8Decoder;
