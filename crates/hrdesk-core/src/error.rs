//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] hrdesk_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] hrdesk_session::SessionError),

    #[error("API error: {0}")]
    Api(#[from] hrdesk_transport::ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not signed in")]
    NotAuthenticated,
}

impl CoreError {
    /// HTTP status of the underlying API failure, 0 otherwise
    pub fn status(&self) -> u16 {
        match self {
            CoreError::Api(e) => e.status(),
            CoreError::Session(e) => e.status(),
            _ => 0,
        }
    }
}
