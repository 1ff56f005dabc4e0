//! Session error types

use hrdesk_transport::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Storage error: {0}")]
    Storage(#[from] hrdesk_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionError {
    /// HTTP status of the underlying API failure, 0 for local failures
    pub fn status(&self) -> u16 {
        match self {
            SessionError::Api(e) => e.status(),
            SessionError::Storage(_) | SessionError::Json(_) => 0,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            SessionError::Api(e) => Some(e),
            _ => None,
        }
    }
}
