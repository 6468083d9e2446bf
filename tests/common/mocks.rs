//! Mock fixtures for integration tests.
//!
//! Re-exports the in-crate mock transport and adds wiremock helpers.

#[allow(unused_imports)]
pub use ragchat::adapters::mock::{MockHttpClient, MockResponse};

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a server that answers `POST /ask` with `body` as an event stream.
#[allow(dead_code)]
pub async fn answer_server(body: Vec<u8>) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(header("Accept", "text/event-stream"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;
    server
}
