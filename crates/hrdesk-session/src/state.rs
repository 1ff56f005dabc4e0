//! In-memory session state

use serde::{Deserialize, Serialize};

use crate::company::{Company, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Unauthenticated,
    Authenticated,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Unauthenticated => "unauthenticated",
            SessionStatus::Authenticated => "authenticated",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token and company are set and cleared together; the user view and the
/// authentication flag are derived from the company.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    token: Option<String>,
    company: Option<Company>,
    ready: bool,
}

impl SessionState {
    pub fn authenticate(&mut self, token: String, company: Company) {
        self.token = Some(token);
        self.company = Some(company);
    }

    /// Replace the cached profile. Ignored when signed out so a late
    /// refresh cannot resurrect a torn-down session.
    pub fn replace_company(&mut self, company: Company) -> bool {
        match self.company.as_mut() {
            Some(current) if current.id == company.id => {
                *current = company;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.company = None;
    }

    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn company(&self) -> Option<&Company> {
        self.company.as_ref()
    }

    pub fn user(&self) -> Option<User> {
        self.company.as_ref().map(User::from)
    }

    pub fn is_authenticated(&self) -> bool {
        self.company.is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_authenticated() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mut state = SessionState::default();
        assert_eq!(state.status(), SessionStatus::Unauthenticated);
        assert!(!state.is_ready());
        assert!(state.user().is_none());

        state.authenticate("abc".to_string(), Company::new(7, "Acme", "a@b.com"));
        assert_eq!(state.status(), SessionStatus::Authenticated);
        assert_eq!(state.token(), Some("abc"));
        assert_eq!(state.user().unwrap().company_id, 7);

        state.clear();
        assert_eq!(state.status(), SessionStatus::Unauthenticated);
        assert!(state.token().is_none());
    }

    #[test]
    fn test_replace_company_requires_same_session() {
        let mut state = SessionState::default();
        assert!(!state.replace_company(Company::new(7, "Acme", "a@b.com")));
        assert!(state.company().is_none());

        state.authenticate("abc".to_string(), Company::new(7, "Acme", "a@b.com"));
        assert!(state.replace_company(Company::new(7, "Acme Corp", "a@b.com")));
        assert_eq!(state.user().unwrap().company_name, "Acme Corp");

        assert!(!state.replace_company(Company::new(8, "Other", "o@b.com")));
        assert_eq!(state.company().unwrap().id, 7);
    }
}
