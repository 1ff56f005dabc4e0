//! Shared session context
//!
//! One context per dashboard instance. The API client and the session
//! manager hold clones of it; all clones see the same state.

use parking_lot::RwLock;
use std::sync::Arc;

use hrdesk_navigation::{Navigator, Route};

use crate::company::Company;
use crate::state::SessionState;
use crate::store::SessionStore;
use crate::Result;

pub struct SessionContext {
    state: Arc<RwLock<SessionState>>,
    store: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl SessionContext {
    pub fn new(store: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            store,
            navigator,
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn company(&self) -> Option<Company> {
        self.state.read().company().cloned()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    /// Persist and adopt a freshly issued session.
    /// State is left untouched when persisting fails.
    pub(crate) fn establish(&self, token: String, company: Company) -> Result<()> {
        // Storage writes happen under the state lock so disk and memory
        // change together.
        let mut state = self.state.write();
        self.store.save(&token, &company)?;
        state.authenticate(token, company);
        Ok(())
    }

    /// Adopt a session read back from storage
    pub(crate) fn restore(&self, token: String, company: Company) {
        self.state.write().authenticate(token, company);
    }

    /// Overwrite the cached profile in memory and storage.
    /// Returns false when the session ended in the meantime.
    pub(crate) fn replace_company(&self, company: Company) -> bool {
        let mut state = self.state.write();
        if !state.replace_company(company.clone()) {
            return false;
        }

        if let Err(e) = self.store.save_company(&company) {
            tracing::warn!(error = %e, company_id = company.id, "Failed to persist refreshed company");
        }
        true
    }

    pub(crate) fn mark_ready(&self) {
        self.state.write().mark_ready();
    }

    /// Drop the persisted keys and in-memory session, then show the login
    /// entry point. Safe to call any number of times.
    pub fn teardown(&self) {
        let was_authenticated = {
            let mut state = self.state.write();
            if let Err(e) = self.store.clear() {
                tracing::error!(error = %e, "Failed to clear persisted session");
            }
            let was = state.is_authenticated();
            state.clear();
            was
        };

        if was_authenticated {
            tracing::info!("Session cleared");
        }

        self.navigator.navigate(Route::Login);
    }
}

impl Clone for SessionContext {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            store: self.store.clone(),
            navigator: Arc::clone(&self.navigator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoredSession;
    use hrdesk_navigation::HistoryNavigator;
    use hrdesk_storage::Database;

    #[test]
    fn test_establish_and_teardown() {
        let navigator = HistoryNavigator::new();
        let store = SessionStore::new(Database::open_in_memory().unwrap());
        let context = SessionContext::new(store.clone(), Arc::new(navigator.clone()));

        context
            .establish("abc".to_string(), Company::new(7, "Acme", "a@b.com"))
            .unwrap();
        assert!(context.snapshot().is_authenticated());
        assert_eq!(store.database().len().unwrap(), 2);

        context.teardown();
        context.teardown();

        assert!(!context.snapshot().is_authenticated());
        assert!(store.database().is_empty().unwrap());
        assert_eq!(navigator.current(), Some(Route::Login));
    }

    #[test]
    fn test_replace_company_after_teardown_leaves_storage_empty() {
        let store = SessionStore::new(Database::open_in_memory().unwrap());
        let context = SessionContext::new(store.clone(), Arc::new(HistoryNavigator::new()));

        context
            .establish("abc".to_string(), Company::new(7, "Acme", "a@b.com"))
            .unwrap();
        context.teardown();

        assert!(!context.replace_company(Company::new(7, "Acme Corp", "a@b.com")));
        assert!(store.database().is_empty().unwrap());
    }

    #[test]
    fn test_racing_refresh_and_teardown_keep_storage_consistent() {
        for _ in 0..50 {
            let store = SessionStore::new(Database::open_in_memory().unwrap());
            let context = SessionContext::new(store.clone(), Arc::new(HistoryNavigator::new()));
            context
                .establish("abc".to_string(), Company::new(7, "Acme", "a@b.com"))
                .unwrap();

            let refresher = {
                let context = context.clone();
                std::thread::spawn(move || {
                    context.replace_company(Company::new(7, "Acme Corp", "a@b.com"));
                })
            };
            let closer = {
                let context = context.clone();
                std::thread::spawn(move || context.teardown())
            };
            refresher.join().unwrap();
            closer.join().unwrap();

            assert!(store.database().is_empty().unwrap());
            assert!(matches!(store.load().unwrap(), StoredSession::Empty));
        }
    }
}
