//! Authenticated client over a fake backend

use std::sync::Arc;

use hrdesk_navigation::HistoryNavigator;
use hrdesk_session::{ApiClient, SessionContext, SessionStore};
use hrdesk_storage::Database;
use hrdesk_transport::testing::FakeBackend;
use hrdesk_transport::Transport;

pub const TOKEN: &str = "abc";

pub fn client() -> (ApiClient, FakeBackend) {
    let db = Database::open_in_memory().unwrap();
    db.set_item("token", TOKEN).unwrap();
    db.set_item("company", r#"{"id":7,"name":"Acme","email":"a@b.com"}"#)
        .unwrap();

    let store = SessionStore::new(db);
    let backend = FakeBackend::new();
    let transport = Transport::new(
        &url::Url::parse("https://api.example.test").unwrap(),
        Arc::new(backend.clone()),
        Arc::new(store.clone()),
    );
    let context = SessionContext::new(store, Arc::new(HistoryNavigator::new()));

    (ApiClient::new(transport, context), backend)
}
