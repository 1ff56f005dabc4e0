//! Response classification

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::Result;

/// Message used when a failed response carries no usable body
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Successful response payload.
///
/// Some endpoints answer with a bare confirmation string instead of a JSON
/// document, so the body shape is decided per response, not per endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Text(String),
}

impl ApiResponse {
    /// Payload returned for a successful response with an empty body
    pub fn empty() -> Self {
        ApiResponse::Json(Value::Object(serde_json::Map::new()))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ApiResponse::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ApiResponse::Text(text) => Some(text),
            ApiResponse::Json(Value::String(text)) => Some(text),
            ApiResponse::Json(_) => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            ApiResponse::Json(value) => value,
            ApiResponse::Text(text) => Value::String(text),
        }
    }

    /// Decode into a typed value. Text payloads decode as a JSON string.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_value(self.into_value()).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Classify a status code and full body text into a payload or an error.
pub fn classify_response(status: u16, body: &str) -> Result<ApiResponse> {
    if !(200..300).contains(&status) {
        if status == 401 {
            return Err(ApiError::Unauthorized);
        }

        return Err(ApiError::Status {
            status,
            message: error_message(body),
        });
    }

    if body.is_empty() {
        return Ok(ApiResponse::empty());
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => Ok(ApiResponse::Json(value)),
        Err(_) => Ok(ApiResponse::Text(body.to_string())),
    }
}

fn error_message(body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .filter(|message| !message.trim().is_empty());

    match from_json {
        Some(message) => message,
        None if body.trim().is_empty() => FALLBACK_ERROR_MESSAGE.to_string(),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_unauthorized_wins_over_body() {
        let err = classify_response(401, r#"{"message":"Token expired"}"#).unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(err.message(), "Unauthorized");
    }

    #[test]
    fn test_error_message_from_json() {
        let err = classify_response(500, r#"{"message":"DB down"}"#).unwrap_err();
        assert_eq!(err.status(), 500);
        assert_eq!(err.message(), "DB down");
    }

    #[test]
    fn test_error_message_falls_back_to_body_text() {
        let err = classify_response(400, "Email already registered").unwrap_err();
        assert_eq!(err.status(), 400);
        assert_eq!(err.message(), "Email already registered");

        let err = classify_response(422, r#"{"error":"bad"}"#).unwrap_err();
        assert_eq!(err.message(), r#"{"error":"bad"}"#);
    }

    #[test]
    fn test_error_message_generic_fallback() {
        let err = classify_response(503, "").unwrap_err();
        assert_eq!(err.status(), 503);
        assert_eq!(err.message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_empty_success_is_empty_object() {
        let response = classify_response(204, "").unwrap();
        assert_eq!(response, ApiResponse::Json(json!({})));
    }

    #[test]
    fn test_json_success_is_returned_unchanged() {
        let response = classify_response(200, r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(response, ApiResponse::Json(json!([{"id": 1}, {"id": 2}])));
    }

    #[test]
    fn test_plain_text_success_is_returned_verbatim() {
        let response = classify_response(200, "Company profile updated successfully.").unwrap();
        assert_eq!(
            response,
            ApiResponse::Text("Company profile updated successfully.".to_string())
        );
    }

    #[test]
    fn test_decode() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Item {
            id: i64,
        }

        let items: Vec<Item> = ApiResponse::Json(json!([{"id": 3}])).decode().unwrap();
        assert_eq!(items, vec![Item { id: 3 }]);

        let answer: String = ApiResponse::Text("42 employees".to_string())
            .decode()
            .unwrap();
        assert_eq!(answer, "42 employees");

        let err = ApiResponse::Text("nope".to_string())
            .decode::<Item>()
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
