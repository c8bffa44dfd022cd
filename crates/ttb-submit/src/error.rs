//! Error types for submission.

use thiserror::Error;
use ttb_editor::ValidationError;

/// Why a submission did not produce a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// The store failed validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered `ok: false`.
    #[error("generation failed: {message}")]
    Rejected {
        message: String,
        /// Last lines of the service-side traceback, when provided.
        traceback: Vec<String>,
    },

    /// The request could not be sent or the response not read.
    #[error("network error: {0}")]
    Transport(String),

    /// The response body was not one of the expected shapes.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl SubmitError {
    /// Returns a user-facing message suitable for display.
    ///
    /// Validation and service errors are shown exactly as produced.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Rejected { message, .. } => message.clone(),
            Self::Transport(detail) => format!("Request failed: {detail}"),
            Self::InvalidResponse(_) => {
                "Server error: the timetable service returned an unexpected response.".to_string()
            }
        }
    }

    /// Whether retrying the same store could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Result type for submission operations.
pub type Result<T> = std::result::Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_shows_service_message_verbatim() {
        let err = SubmitError::Rejected {
            message: "Semester 9 not found".to_string(),
            traceback: Vec::new(),
        };
        assert_eq!(err.user_message(), "Semester 9 not found");
        assert!(!err.is_retryable());
    }

    #[test]
    fn validation_message_passes_through() {
        let err = SubmitError::from(ValidationError::MissingName { position: 1 });
        assert_eq!(err.user_message(), "Faculty #1: name is required.");
        assert_eq!(err.to_string(), "Faculty #1: name is required.");
    }

    #[test]
    fn transport_is_retryable() {
        let err = SubmitError::Transport("connection refused".to_string());
        assert!(err.is_retryable());
        assert_eq!(err.user_message(), "Request failed: connection refused");
    }
}
