//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - streaming POST to the answer service
//! - [`AnswerConsumer`] - display of a streamed answer

pub mod consumer;
pub mod http;

pub use consumer::AnswerConsumer;
pub use http::{ByteStream, Headers, HttpClient};
