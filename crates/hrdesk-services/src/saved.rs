//! Outcome of create and update calls

use serde::de::DeserializeOwned;
use serde_json::Value;

use hrdesk_transport::ApiResponse;

/// Mutating endpoints answer with the stored record, a bare confirmation
/// string, or an empty body. All three are a successful save.
#[derive(Debug, Clone, PartialEq)]
pub enum Saved<T> {
    Record(T),
    /// Confirmation text, `None` when the body was empty or unrecognized
    Confirmed(Option<String>),
}

impl<T: DeserializeOwned> Saved<T> {
    pub(crate) fn from_response(response: ApiResponse) -> Self {
        match response {
            ApiResponse::Text(text) | ApiResponse::Json(Value::String(text)) => {
                Saved::Confirmed(Some(text))
            }
            response => match response.decode::<T>() {
                Ok(record) => Saved::Record(record),
                Err(e) => {
                    tracing::debug!(error = %e, "Save acknowledged without a record");
                    Saved::Confirmed(None)
                }
            },
        }
    }
}

impl<T> Saved<T> {
    pub fn record(&self) -> Option<&T> {
        match self {
            Saved::Record(record) => Some(record),
            Saved::Confirmed(_) => None,
        }
    }

    pub fn into_record(self) -> Option<T> {
        match self {
            Saved::Record(record) => Some(record),
            Saved::Confirmed(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Saved::Confirmed(message) => message.as_deref(),
            Saved::Record(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrdesk_transport::classify_response;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i64,
    }

    fn saved(body: &str) -> Saved<Item> {
        Saved::from_response(classify_response(200, body).unwrap())
    }

    #[test]
    fn test_record_body() {
        assert_eq!(saved(r#"{"id":4}"#), Saved::Record(Item { id: 4 }));
    }

    #[test]
    fn test_confirmation_bodies() {
        assert_eq!(saved("Saved.").message(), Some("Saved."));
        assert_eq!(saved(r#""Saved.""#).message(), Some("Saved."));
        assert_eq!(saved(""), Saved::Confirmed(None));
        assert_eq!(saved(r#"{"ok":true}"#).record(), None);
    }
}
