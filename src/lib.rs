//! ragchat - a terminal client for streamed retrieval-augmented answers.
//!
//! The answer service streams `data: ` lines. Most carry answer text; one may
//! carry the retrieved documents as JSON between `__SEARCH_RESULTS__` and
//! `__END_SEARCH__`. [`sse::decode`] turns the raw response body into
//! [`sse::DecodedEvent`]s regardless of where the network splits it.
//!
//! This library exposes modules for use in integration tests and the binary.

pub mod adapters;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod session;
pub mod sse;
pub mod traits;

pub use client::RagClient;
pub use config::ClientConfig;
pub use error::ChatError;
pub use session::{Answer, ChatSession};
pub use sse::{decode, DecodedEvent, StreamDecoder};
