//! HRDesk Storage Layer
//!
//! Durable client-local key/value storage, the equivalent of a browser's
//! local storage. Values survive process restarts when opened on a file.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
