//! Error types for the client data layer.

use thiserror::Error;

/// Errors that can occur when calling the Planora backend.
///
/// The taxonomy is deliberately small: a call either fails to complete
/// (transport, status, parse) or completes with a backend-reported
/// failure. Loaders flatten every variant into a localized message; the
/// variants exist so callers that talk to the accessors directly can still
/// branch on the cause.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failure (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The response body was not valid JSON for the expected type.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend completed the call but reported `success: false`.
    #[error("backend error: {0}")]
    Backend(String),

    /// The response matched neither the wrapped nor the bare payload shape.
    #[error("unexpected payload shape: expected `{key}` field or bare entity")]
    UnexpectedShape {
        /// Entity key the accessor expected to find.
        key: &'static str,
    },

    /// A mutation completed without returning the entity it acted on.
    #[error("no {0} returned by the backend")]
    MissingEntity(&'static str),
}

impl ApiError {
    /// Whether the error was reported by the backend rather than produced
    /// by transport or decoding.
    #[must_use]
    pub const fn is_backend_reported(&self) -> bool {
        matches!(self, Self::Backend(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Backend("quota exceeded".to_string());
        assert_eq!(err.to_string(), "backend error: quota exceeded");
        assert!(err.is_backend_reported());

        let err = ApiError::UnexpectedShape { key: "user" };
        assert_eq!(
            err.to_string(),
            "unexpected payload shape: expected `user` field or bare entity"
        );
        assert!(!err.is_backend_reported());
    }
}
