//! AI assistant and CV parser

use serde::{Deserialize, Serialize};
use serde_json::Value;

use hrdesk_session::ApiClient;
use hrdesk_transport::ApiResponse;

use crate::Result;

#[derive(Debug, Serialize)]
struct Question<'q> {
    question: &'q str,
}

/// Candidate details extracted from an uploaded CV
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
}

pub struct AiService<'a> {
    client: &'a ApiClient,
}

impl<'a> AiService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Ask a free-form question. The backend answers with a bare string;
    /// a JSON `answer` field is accepted too.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let response = self
            .client
            .post("/api/ai/ask", &Question { question })
            .await?;

        Ok(answer_text(response))
    }

    pub async fn process_cv(&self, file_name: &str, bytes: Vec<u8>) -> Result<CandidateProfile> {
        self.client
            .upload("/api/ai/process-cv", "file", file_name, bytes)
            .await?
            .decode()
    }
}

fn answer_text(response: ApiResponse) -> String {
    match response {
        ApiResponse::Text(text) => text,
        ApiResponse::Json(Value::String(text)) => text,
        ApiResponse::Json(value) => match value.get("answer").and_then(Value::as_str) {
            Some(answer) => answer.to_string(),
            None => value.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use hrdesk_transport::{Method, RequestBody};

    #[tokio::test]
    async fn test_ask_plain_text_answer() {
        let (client, backend) = test_support::client();
        backend.on(Method::Post, "/api/ai/ask", 200, "You have 3 pending leaves.");

        let answer = AiService::new(&client)
            .ask("How many leaves are pending?")
            .await
            .unwrap();

        assert_eq!(answer, "You have 3 pending leaves.");
        assert_eq!(
            backend.last_request().unwrap().body,
            RequestBody::Json(r#"{"question":"How many leaves are pending?"}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_ask_json_answer() {
        let (client, backend) = test_support::client();
        backend.on(Method::Post, "/api/ai/ask", 200, r#"{"answer":"All good."}"#);

        let answer = AiService::new(&client).ask("Status?").await.unwrap();
        assert_eq!(answer, "All good.");
    }

    #[tokio::test]
    async fn test_process_cv() {
        let (client, backend) = test_support::client();
        backend.on(
            Method::Post,
            "/api/ai/process-cv",
            200,
            r#"{"firstName":"Ada","lastName":"Lovelace","skills":"Mathematics"}"#,
        );

        let profile = AiService::new(&client)
            .process_cv("ada.pdf", b"%PDF-1.4".to_vec())
            .await
            .unwrap();

        assert_eq!(profile.first_name.as_deref(), Some("Ada"));
        assert_eq!(profile.email, None);
        assert!(matches!(
            backend.last_request().unwrap().body,
            RequestBody::Multipart { ref field, .. } if field == "file"
        ));
    }
}
