//! Answer service client.
//!
//! Posts a question to the streaming ask endpoint and hands the response
//! body to the stream decoder.

use crate::adapters::ReqwestHttpClient;
use crate::config::ClientConfig;
use crate::error::{ChatError, TransportError};
use crate::models::QueryRequest;
use crate::sse::{decode, EventStream};
use crate::traits::{Headers, HttpClient};

/// Client for the answer service.
///
/// Generic over the HTTP transport so tests can substitute
/// [`MockHttpClient`](crate::adapters::MockHttpClient).
pub struct RagClient<C: HttpClient = ReqwestHttpClient> {
    config: ClientConfig,
    http: C,
}

impl RagClient<ReqwestHttpClient> {
    /// Create a client backed by reqwest.
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let http = match config.connect_timeout {
            Some(timeout) => ReqwestHttpClient::with_connect_timeout(timeout)?,
            None => ReqwestHttpClient::new(),
        };
        Ok(Self { config, http })
    }
}

impl<C: HttpClient> RagClient<C> {
    /// Create a client with a custom transport.
    pub fn with_http_client(config: ClientConfig, http: C) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ask a question and stream the answer.
    ///
    /// Sends `POST {base_url}{ask_path}` with a JSON body `{"query": ...}`.
    /// The query is sent as given. Each call decodes its response with a
    /// fresh decoder.
    ///
    /// # Errors
    /// Fails before any event if the request cannot be sent or the service
    /// answers with a non-success status. Later failures arrive as the last
    /// item of the returned stream.
    pub async fn ask(&self, query: &str) -> Result<EventStream, ChatError> {
        let url = self.config.ask_url();
        let body = serde_json::to_string(&QueryRequest::new(query))
            .map_err(|e| TransportError::Other(format!("failed to encode request: {}", e)))?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "text/event-stream".to_string());

        tracing::info!(url = %url, query_chars = query.chars().count(), "asking");

        let bytes = self.http.post_stream(&url, &body, &headers).await?;
        Ok(decode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::sse::DecodedEvent;
    use futures_util::StreamExt;

    const URL: &str = "http://localhost:5000/ask";

    fn client_with(response: MockResponse) -> (RagClient<MockHttpClient>, MockHttpClient) {
        let http = MockHttpClient::new();
        http.set_response(URL, response);
        (
            RagClient::with_http_client(ClientConfig::default(), http.clone()),
            http,
        )
    }

    #[tokio::test]
    async fn test_ask_sends_json_query() {
        let (client, http) = client_with(MockResponse::Stream(Vec::new()));

        let stream = client.ask("Merhaba").await.unwrap();
        assert!(stream.collect::<Vec<_>>().await.is_empty());

        let requests = http.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, URL);
        assert_eq!(requests[0].body, r#"{"query":"Merhaba"}"#);
        assert_eq!(
            requests[0].headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            requests[0].headers.get("Accept"),
            Some(&"text/event-stream".to_string())
        );
    }

    #[tokio::test]
    async fn test_ask_decodes_chunked_body() {
        let (client, _) = client_with(MockResponse::chunked(
            "data: Yanıt \n\ndata: hazır\n\n".as_bytes(),
            3,
        ));

        let events: Vec<_> = client.ask("q").await.unwrap().collect().await;
        assert_eq!(
            events,
            vec![
                Ok(DecodedEvent::AppendText("Yanıt ".to_string())),
                Ok(DecodedEvent::AppendText("hazır".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_ask_reports_status_before_streaming() {
        let (client, _) = client_with(MockResponse::Error(TransportError::Status {
            status: 400,
            message: r#"{"error": "Query alanı boş olamaz"}"#.to_string(),
        }));

        match client.ask("").await {
            Err(ChatError::Transport(TransportError::Status { status, .. })) => {
                assert_eq!(status, 400)
            }
            Err(other) => panic!("Expected status error, got {:?}", other),
            Ok(_) => panic!("Expected status error, got a stream"),
        }
    }

    #[test]
    fn test_config_accessor() {
        let client = RagClient::with_http_client(
            ClientConfig::default().with_base_url("http://rag:9000"),
            MockHttpClient::new(),
        );
        assert_eq!(client.config().ask_url(), "http://rag:9000/ask");
    }
}
