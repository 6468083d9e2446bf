//! Unified error type for the chat client.

use thiserror::Error;

use super::category::ErrorCategory;
use super::transport::TransportError;
use crate::sse::DecodeError;

/// Message shown to the user when an answer cannot be produced.
pub const FALLBACK_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// Every way asking a question can fail.
///
/// Events delivered before a `Transport` or `Decode` error stay valid; the
/// answer simply ends early.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    /// The request failed or the response body broke off.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response stream could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The query was empty after trimming; nothing was sent.
    #[error("query is empty")]
    EmptyQuery,
}

impl ChatError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChatError::Transport(err) if err.is_server_status() => ErrorCategory::Server,
            ChatError::Transport(_) => ErrorCategory::Network,
            ChatError::Decode(_) => ErrorCategory::Protocol,
            ChatError::EmptyQuery => ErrorCategory::User,
        }
    }

    /// Whether trying the same question again might succeed.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ChatError::Transport(err) => err.error_code(),
            ChatError::Decode(err) => err.error_code(),
            ChatError::EmptyQuery => "E_USER_EMPTY",
        }
    }

    /// Get a user-friendly error message.
    ///
    /// Transport and decode failures share one generic message; the details
    /// go to the log.
    pub fn user_message(&self) -> String {
        match self {
            ChatError::Transport(_) | ChatError::Decode(_) => FALLBACK_MESSAGE.to_string(),
            ChatError::EmptyQuery => "Please type a question first.".to_string(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}
