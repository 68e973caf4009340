//! Errors surfaced by the API client layer

use thiserror::Error;

pub const REQUEST_FAILED: &str = "Request failed";
pub const UPLOAD_FAILED: &str = "Upload failed";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status. `message` is taken from the `{error|message}` body if present.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or(REQUEST_FAILED))]
    Http { status: u16, message: Option<String> },

    /// Body did not match the expected schema or violated a value invariant
    #[error("unexpected response: {0}")]
    Schema(String),

    /// 2xx response carrying an error body
    #[error("{0}")]
    Rejected(String),

    /// Client-side validation before anything was sent
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Text for the error banner. Backend-provided messages are shown
    /// verbatim, everything else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Rejected(message) | ApiError::Validation(message) => message.clone(),
            ApiError::Network(_) | ApiError::Http { message: None, .. } | ApiError::Schema(_) => {
                fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_shown() {
        let err = ApiError::Http {
            status: 400,
            message: Some("Invalid date range".into()),
        };
        assert_eq!(err.user_message(REQUEST_FAILED), "Invalid date range");
    }

    #[test]
    fn test_unknown_shapes_fall_back() {
        let err = ApiError::Http {
            status: 502,
            message: None,
        };
        assert_eq!(err.user_message(REQUEST_FAILED), "Request failed");
        assert_eq!(
            ApiError::Schema("missing field `revenue`".into()).user_message(UPLOAD_FAILED),
            "Upload failed"
        );
        assert_eq!(
            ApiError::Network("TypeError".into()).user_message(REQUEST_FAILED),
            "Request failed"
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP 500: Request failed");
    }
}
