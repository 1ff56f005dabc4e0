//! Persisted session keys

use hrdesk_storage::Database;
use hrdesk_transport::TokenSource;

use crate::company::Company;
use crate::Result;

pub const TOKEN_KEY: &str = "token";
pub const COMPANY_KEY: &str = "company";

/// What startup finds in storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoredSession {
    Empty,
    Valid { token: String, company: Company },
    /// Unparseable company or a token/company pair with one half missing
    Corrupt(String),
}

/// Token and company profile in durable storage, under separate keys
pub struct SessionStore {
    db: Database,
}

impl SessionStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub(crate) fn load(&self) -> Result<StoredSession> {
        let token = self.db.get_item(TOKEN_KEY)?.filter(|t| !t.is_empty());
        let company = self.db.get_item(COMPANY_KEY)?;

        Ok(match (token, company) {
            (None, None) => StoredSession::Empty,
            (Some(token), Some(company_json)) => {
                match serde_json::from_str::<Company>(&company_json) {
                    Ok(company) => StoredSession::Valid { token, company },
                    Err(e) => StoredSession::Corrupt(format!("unparseable company: {e}")),
                }
            }
            (Some(_), None) => StoredSession::Corrupt("token without company".to_string()),
            (None, Some(_)) => StoredSession::Corrupt("company without token".to_string()),
        })
    }

    /// Write token and company in one transaction
    pub fn save(&self, token: &str, company: &Company) -> Result<()> {
        let company_json = serde_json::to_string(company)?;
        self.db
            .set_items(&[(TOKEN_KEY, token), (COMPANY_KEY, company_json.as_str())])?;
        Ok(())
    }

    pub fn save_company(&self, company: &Company) -> Result<()> {
        let company_json = serde_json::to_string(company)?;
        self.db.set_item(COMPANY_KEY, &company_json)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.db.remove_items(&[TOKEN_KEY, COMPANY_KEY])?;
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

impl TokenSource for SessionStore {
    fn token(&self) -> Option<String> {
        match self.db.get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read token from storage");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_save_load_clear() {
        let store = store();
        assert_eq!(store.load().unwrap(), StoredSession::Empty);

        let company = Company::new(7, "Acme", "a@b.com");
        store.save("abc", &company).unwrap();

        assert_eq!(
            store.load().unwrap(),
            StoredSession::Valid {
                token: "abc".to_string(),
                company
            }
        );
        assert_eq!(store.token().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), StoredSession::Empty);
        assert!(store.token().is_none());
    }

    #[test]
    fn test_corrupt_states() {
        let store = store();

        store.database().set_item(TOKEN_KEY, "abc").unwrap();
        assert!(matches!(store.load().unwrap(), StoredSession::Corrupt(_)));

        store.database().set_item(COMPANY_KEY, "{not json").unwrap();
        assert!(matches!(store.load().unwrap(), StoredSession::Corrupt(_)));

        store.database().remove_item(TOKEN_KEY).unwrap();
        store
            .database()
            .set_item(COMPANY_KEY, r#"{"id":7,"name":"Acme"}"#)
            .unwrap();
        assert!(matches!(store.load().unwrap(), StoredSession::Corrupt(_)));
    }
}
