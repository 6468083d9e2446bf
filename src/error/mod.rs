//! Error handling for the chat client.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Transport Errors**: request and response-body failures
//! - **Decode Errors**: protocol violations in the answer stream (defined in
//!   [`crate::sse`], re-exported here)
//! - **Unified Error Type**: [`ChatError`] consolidates all of the above
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout, broken body | Yes |
//! | Server | Non-success HTTP status | Yes |
//! | Protocol | Undecodable answer stream | No |
//! | User | Empty query | No |
//!
//! Nothing is retried automatically. The renderer prints the category's
//! recovery hint under the fallback message, and the session logs whether
//! the failure was retryable.

mod category;
mod chat_error;
mod transport;

pub use crate::sse::DecodeError;
pub use category::ErrorCategory;
pub use chat_error::{ChatError, FALLBACK_MESSAGE};
pub use transport::{classify_reqwest_error, TransportError};
