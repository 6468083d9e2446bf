//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction for the streaming POST used to ask a
//! question, enabling dependency injection and mocking in tests.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::collections::HashMap;
use std::pin::Pin;

use crate::error::TransportError;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// Response body delivered as it arrives.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send>>;

/// Trait for HTTP client operations.
///
/// Implementations include the production reqwest-based client and
/// [`MockHttpClient`](crate::adapters::mock::MockHttpClient) for tests.
///
/// # Example
///
/// ```ignore
/// use ragchat::traits::{Headers, HttpClient};
///
/// async fn raw_answer<C: HttpClient>(client: &C) -> Result<(), TransportError> {
///     let body = client
///         .post_stream("http://localhost:5000/ask", r#"{"query":"hi"}"#, &Headers::new())
///         .await?;
///     // hand `body` to ragchat::sse::decode
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a POST request and return the response body as a stream.
    ///
    /// A non-2xx status is reported as [`TransportError::Status`] and no
    /// stream is returned.
    ///
    /// # Arguments
    /// * `url` - The URL to request
    /// * `body` - Request body as a string
    /// * `headers` - Request headers
    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<ByteStream, TransportError>;
}
