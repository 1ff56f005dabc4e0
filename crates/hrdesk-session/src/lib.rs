//! HRDesk Session Management
//!
//! - A session is a bearer token plus the cached company profile
//! - Token and company are persisted together or not at all
//! - Startup restores the session from storage without a network call
//! - Any 401 from any endpoint tears the session down and redirects to login
//! - Refreshing the cached company is best-effort and never fails

mod auth;
mod client;
mod company;
mod context;
mod error;
mod manager;
mod state;
mod store;

pub use auth::{LoginRequest, RegistrationData};
pub use client::ApiClient;
pub use company::{Company, User};
pub use context::SessionContext;
pub use error::SessionError;
pub use manager::{RefreshOutcome, SessionManager};
pub use state::{SessionState, SessionStatus};
pub use store::{SessionStore, COMPANY_KEY, TOKEN_KEY};

pub type Result<T> = std::result::Result<T, SessionError>;
