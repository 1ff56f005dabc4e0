//! Classified API errors

use thiserror::Error;

/// Single failure type seen by every caller of the transport.
///
/// Callers distinguish cases by `status()`; requests that never reached the
/// server report status 0.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Unauthorized => 401,
            ApiError::Status { status, .. } => *status,
            ApiError::Network(_) | ApiError::InvalidRequest(_) | ApiError::Decode(_) => 0,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized => "Unauthorized",
            ApiError::Status { message, .. } => message,
            ApiError::Network(message)
            | ApiError::InvalidRequest(message)
            | ApiError::Decode(message) => message,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_message() {
        assert_eq!(ApiError::Unauthorized.status(), 401);
        assert_eq!(ApiError::Unauthorized.message(), "Unauthorized");

        let err = ApiError::Status {
            status: 500,
            message: "DB down".to_string(),
        };
        assert_eq!(err.status(), 500);
        assert_eq!(err.message(), "DB down");
        assert_eq!(err.to_string(), "DB down (HTTP 500)");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.status(), 0);
        assert!(!err.is_unauthorized());
    }
}
