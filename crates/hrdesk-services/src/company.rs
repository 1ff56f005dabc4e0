//! Company profile service

use serde::{Deserialize, Serialize};

use hrdesk_session::{ApiClient, Company};
use hrdesk_transport::ApiResponse;

use crate::Result;

const DEFAULT_UPDATE_MESSAGE: &str = "Company profile updated successfully";

/// Partial profile update; unset fields are left out of the payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// The update endpoint answers with either the saved profile or a plain
/// confirmation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyUpdate {
    Profile(Company),
    Message(String),
}

impl CompanyUpdate {
    /// Text to show the user after a successful update
    pub fn message(&self) -> &str {
        match self {
            CompanyUpdate::Message(message) => message,
            CompanyUpdate::Profile(_) => DEFAULT_UPDATE_MESSAGE,
        }
    }

    fn from_response(response: ApiResponse) -> Self {
        if let Some(text) = response.as_text() {
            return CompanyUpdate::Message(text.to_string());
        }

        match response.decode::<Company>() {
            Ok(company) => CompanyUpdate::Profile(company),
            Err(_) => CompanyUpdate::Message(DEFAULT_UPDATE_MESSAGE.to_string()),
        }
    }
}

pub struct CompanyService<'a> {
    client: &'a ApiClient,
}

impl<'a> CompanyService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: i64) -> Result<Company> {
        self.client
            .get_json(&format!("/api/companies/get/{id}"))
            .await
    }

    pub async fn list(&self) -> Result<Vec<Company>> {
        self.client.get_json("/api/companies").await
    }

    pub async fn update(&self, id: i64, patch: &CompanyPatch) -> Result<CompanyUpdate> {
        let response = self
            .client
            .put(&format!("/api/companies/update/{id}"), patch)
            .await?;

        tracing::info!(company_id = id, "Company profile updated");
        Ok(CompanyUpdate::from_response(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use hrdesk_transport::{Method, RequestBody};

    #[tokio::test]
    async fn test_get_company() {
        let (client, backend) = test_support::client();
        backend.on(
            Method::Get,
            "/api/companies/get/7",
            200,
            r#"{"id":7,"name":"Acme","email":"a@b.com","industry":"Retail"}"#,
        );

        let company = CompanyService::new(&client).get(7).await.unwrap();
        assert_eq!(company.industry.as_deref(), Some("Retail"));
    }

    #[tokio::test]
    async fn test_update_with_plain_text_confirmation() {
        let (client, backend) = test_support::client();
        backend.on(
            Method::Put,
            "/api/companies/update/7",
            200,
            "Company profile updated successfully.",
        );

        let patch = CompanyPatch {
            phone: Some("555-0100".to_string()),
            ..Default::default()
        };
        let update = CompanyService::new(&client).update(7, &patch).await.unwrap();

        assert_eq!(
            update,
            CompanyUpdate::Message("Company profile updated successfully.".to_string())
        );
        assert_eq!(
            backend.last_request().unwrap().body,
            RequestBody::Json(r#"{"phone":"555-0100"}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_update_with_profile_or_empty_body() {
        let (client, backend) = test_support::client();
        backend.on(
            Method::Put,
            "/api/companies/update/7",
            200,
            r#"{"id":7,"name":"Acme Corp","email":"a@b.com"}"#,
        );
        backend.on(Method::Put, "/api/companies/update/7", 200, "");

        let service = CompanyService::new(&client);
        let first = service.update(7, &CompanyPatch::default()).await.unwrap();
        assert!(matches!(first, CompanyUpdate::Profile(ref c) if c.name == "Acme Corp"));
        assert_eq!(first.message(), DEFAULT_UPDATE_MESSAGE);

        let second = service.update(7, &CompanyPatch::default()).await.unwrap();
        assert_eq!(second.message(), DEFAULT_UPDATE_MESSAGE);
    }
}
