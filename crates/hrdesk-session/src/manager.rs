//! Session Manager
//!
//! Owns the authentication lifecycle and is the only writer of the
//! persisted token and company.

use hrdesk_navigation::Route;
use hrdesk_transport::ApiError;

use crate::auth::{AuthResponse, LoginRequest, RegistrationData};
use crate::client::ApiClient;
use crate::company::{Company, User};
use crate::context::SessionContext;
use crate::state::SessionStatus;
use crate::store::StoredSession;
use crate::Result;

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/companies/add";

/// Result of a best-effort company refresh
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// Server profile adopted in memory and storage
    Refreshed(Company),
    /// Refetch failed; the cached profile is still in place
    KeptStale { company: Company, error: ApiError },
    /// Nothing cached, or the session ended before the refetch completed
    NoSession,
}

impl RefreshOutcome {
    pub fn company(&self) -> Option<&Company> {
        match self {
            RefreshOutcome::Refreshed(company) => Some(company),
            RefreshOutcome::KeptStale { company, .. } => Some(company),
            RefreshOutcome::NoSession => None,
        }
    }
}

pub struct SessionManager {
    client: ApiClient,
}

impl SessionManager {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn context(&self) -> &SessionContext {
        self.client.context()
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Restore the session from storage. Trusts the cache without a network
    /// round-trip; anything unusable is cleared. Always marks the session
    /// ready.
    pub fn bootstrap(&self) -> SessionStatus {
        let context = self.context();

        match context.store().load() {
            Ok(StoredSession::Valid { token, company }) => {
                tracing::info!(
                    company_id = company.id,
                    company_name = %company.name,
                    "Restored session from storage"
                );
                context.restore(token, company);
            }
            Ok(StoredSession::Empty) => {
                tracing::debug!("No stored session");
            }
            Ok(StoredSession::Corrupt(reason)) => {
                tracing::warn!(%reason, "Discarding corrupt stored session");
                if let Err(e) = context.store().clear() {
                    tracing::error!(error = %e, "Failed to clear corrupt session");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored session");
            }
        }

        context.mark_ready();
        self.status()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: AuthResponse = self.client.post_json(LOGIN_PATH, &request).await?;
        self.begin(response, email)
    }

    /// Register a company and sign in as it. No confirmation step.
    pub async fn register(&self, data: &RegistrationData) -> Result<User> {
        let response: AuthResponse = self.client.post_json(REGISTER_PATH, data).await?;
        self.begin(response, &data.email)
    }

    fn begin(&self, response: AuthResponse, email: &str) -> Result<User> {
        let (token, company) = response.into_session(email)?;
        let user = User::from(&company);

        self.context().establish(token, company)?;

        tracing::info!(
            company_id = user.company_id,
            company_name = %user.company_name,
            "Signed in"
        );

        self.context().navigate(Route::Dashboard);
        Ok(user)
    }

    /// Sign out. Safe to call when already signed out.
    pub fn logout(&self) {
        self.context().teardown();
    }

    /// Re-fetch the cached company profile. Never fails.
    pub async fn refresh_company(&self) -> RefreshOutcome {
        // Lock is released before the request is issued
        let Some(cached) = self.context().company() else {
            return RefreshOutcome::NoSession;
        };

        let path = format!("/api/companies/get/{}", cached.id);
        match self.client.get_json::<Company>(&path).await {
            Ok(company) if company.id != cached.id => {
                let error = ApiError::Decode(format!(
                    "expected company {}, got company {}",
                    cached.id, company.id
                ));
                tracing::warn!(
                    company_id = cached.id,
                    returned_id = company.id,
                    "Company refresh returned another profile, keeping cached profile"
                );
                RefreshOutcome::KeptStale {
                    company: cached,
                    error,
                }
            }
            Ok(company) => {
                if self.context().replace_company(company.clone()) {
                    tracing::debug!(company_id = company.id, "Refreshed company profile");
                    RefreshOutcome::Refreshed(company)
                } else {
                    RefreshOutcome::NoSession
                }
            }
            Err(error) if error.is_unauthorized() => RefreshOutcome::NoSession,
            Err(error) => {
                tracing::warn!(
                    company_id = cached.id,
                    error = %error,
                    "Company refresh failed, keeping cached profile"
                );
                RefreshOutcome::KeptStale {
                    company: cached,
                    error,
                }
            }
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.context().snapshot().status()
    }

    pub fn is_authenticated(&self) -> bool {
        self.context().snapshot().is_authenticated()
    }

    pub fn is_ready(&self) -> bool {
        self.context().snapshot().is_ready()
    }

    pub fn user(&self) -> Option<User> {
        self.context().snapshot().user()
    }

    pub fn company(&self) -> Option<Company> {
        self.context().company()
    }

    pub fn token(&self) -> Option<String> {
        self.context().snapshot().token().map(str::to_string)
    }
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}
