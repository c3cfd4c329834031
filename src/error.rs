// ============================================================================
// ERRORS - HTTP layer failures
// ============================================================================
// Every failure is caught by the view model that issued the request and
// logged. Nothing here ever reaches the DOM.
// ============================================================================

use thiserror::Error;

/// Error returned by a `Backend` call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    /// The request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The response body was not what we expected
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            status_text: status_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_log_format() {
        assert_eq!(
            ApiError::status(500, "Internal Server Error").to_string(),
            "HTTP 500: Internal Server Error"
        );
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ApiError::Parse("expected value at line 1".into()).to_string(),
            "Parse error: expected value at line 1"
        );
    }
}
