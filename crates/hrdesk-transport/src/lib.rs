//! HRDesk Request Transport
//!
//! Turns a logical request (verb + path + payload) into an HTTP call and
//! classifies the response:
//! - the body is always read as text first
//! - 401 is classified as `ApiError::Unauthorized` before anything else
//! - other failures carry the server's `message` field, the raw body, or a
//!   generic fallback
//! - success bodies are JSON when they parse, raw text otherwise, and an
//!   empty object when empty
//!
//! The transport has no side effects. Reacting to 401 is the caller's job.

mod backend;
mod error;
mod request;
mod response;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
mod transport;

pub use backend::{HttpBackend, ReqwestBackend};
pub use error::ApiError;
pub use request::{HttpRequest, HttpResponse, Method, RequestBody};
pub use response::{classify_response, ApiResponse, FALLBACK_ERROR_MESSAGE};
pub use transport::{TokenSource, Transport};

pub type Result<T> = std::result::Result<T, ApiError>;
