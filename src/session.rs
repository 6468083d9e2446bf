//! Chat session: one query in flight at a time.
//!
//! `send` takes `&mut self`, so a second query cannot start until the
//! previous answer has finished streaming.

use futures_util::StreamExt;

use crate::adapters::ReqwestHttpClient;
use crate::client::RagClient;
use crate::error::ChatError;
use crate::models::SearchResultSet;
use crate::sse::DecodedEvent;
use crate::traits::{AnswerConsumer, HttpClient};

/// A fully received answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answer {
    /// All text fragments, concatenated in arrival order
    pub text: String,
    /// The most recent set of retrieved documents, if any arrived
    pub results: Option<SearchResultSet>,
    /// How many result sets the stream carried
    pub result_sets: usize,
}

/// Sends queries and forwards the streamed answers to a consumer.
pub struct ChatSession<C: HttpClient = ReqwestHttpClient> {
    client: RagClient<C>,
    answered: u64,
}

impl<C: HttpClient> ChatSession<C> {
    pub fn new(client: RagClient<C>) -> Self {
        Self {
            client,
            answered: 0,
        }
    }

    /// Number of queries answered without error.
    pub fn answered(&self) -> u64 {
        self.answered
    }

    /// Ask a question and stream the answer into `consumer`.
    ///
    /// The query is trimmed first; an empty query is rejected without any
    /// request. Events reach the consumer as they are decoded. On failure
    /// the consumer gets `on_error` and the same error is returned; events
    /// already delivered stay delivered.
    pub async fn send<A>(&mut self, query: &str, consumer: &mut A) -> Result<Answer, ChatError>
    where
        A: AnswerConsumer + ?Sized,
    {
        let query = query.trim();
        if query.is_empty() {
            let err = ChatError::EmptyQuery;
            consumer.on_error(&err);
            return Err(err);
        }

        consumer.on_waiting();
        match self.stream_answer(query, consumer).await {
            Ok(answer) => {
                self.answered += 1;
                tracing::debug!(
                    text_chars = answer.text.chars().count(),
                    result_sets = answer.result_sets,
                    "answer complete"
                );
                consumer.on_complete(&answer);
                Ok(answer)
            }
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    category = %err.category(),
                    retryable = err.is_retryable(),
                    error = %err,
                    "answer failed"
                );
                consumer.on_error(&err);
                Err(err)
            }
        }
    }

    async fn stream_answer<A>(&self, query: &str, consumer: &mut A) -> Result<Answer, ChatError>
    where
        A: AnswerConsumer + ?Sized,
    {
        let mut events = self.client.ask(query).await?;
        let mut answer = Answer::default();

        while let Some(event) = events.next().await {
            let event = event?;
            tracing::trace!(event = event.event_type_name(), "answer event");
            match event {
                DecodedEvent::AppendText(fragment) => {
                    consumer.on_text(&fragment);
                    answer.text.push_str(&fragment);
                }
                DecodedEvent::ResultsReady(results) => {
                    consumer.on_results(&results);
                    answer.result_sets += 1;
                    answer.results = Some(results);
                }
            }
        }

        Ok(answer)
    }
}
