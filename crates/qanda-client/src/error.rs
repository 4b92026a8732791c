//! Error taxonomy for gateway and session operations.
//!
//! Every error is terminal for the operation that raised it: nothing is
//! retried, and callers convert them into user-visible feedback.

use thiserror::Error;

use crate::store::StoreError;

/// Client-side input rejection, raised before any network call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("event name must not be empty")]
    EmptyEventName,
    #[error("event type must not be empty")]
    EmptyEventType,
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("invite code must not be empty")]
    EmptyInviteCode,
    #[error("creator code must not be empty")]
    EmptyCreatorCode,
    #[error("question text must not be empty")]
    EmptyQuestionText,
    #[error("questions require between {min} and {max} options, got {got}")]
    OptionCount { min: usize, max: usize, got: usize },
    #[error("option {0} must not be empty")]
    EmptyOption(usize),
    #[error("correct answer index {index} is out of bounds for {options} options")]
    CorrectAnswerOutOfBounds { index: usize, options: usize },
    #[error("no answers to submit")]
    NoAnswers,
}

/// Uniform error type for every client operation.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-2xx response. The message comes from the server's `{error}`
    /// envelope when present, else the HTTP status text.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// Network failure or malformed response body.
    #[error("transport error: {0}")]
    Transport(String),

    /// Stored credentials failed re-validation during hydration; the
    /// session has been cleared and the user must re-enter credentials.
    #[error("stored session is no longer valid: {0}")]
    StaleSession(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_displays_server_message() {
        let err = ClientError::Request {
            status: 404,
            message: "Event not found".to_string(),
        };
        assert_eq!(err.to_string(), "Event not found");
    }

    #[test]
    fn validation_error_passes_through() {
        let err = ClientError::from(ValidationError::CorrectAnswerOutOfBounds {
            index: 2,
            options: 2,
        });
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(err.to_string().contains("out of bounds"));
    }
}
