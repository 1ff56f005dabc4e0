//! Leave request service

use serde::{Deserialize, Serialize};

use hrdesk_session::ApiClient;

use crate::saved::Saved;
use crate::Result;

const LEAVES_PATH: &str = "/api/v1/leaves";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Leave {
    pub fn is_pending(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("pending"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeave {
    pub employee_id: i64,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeavePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl LeavePatch {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }
}

pub struct LeaveService<'a> {
    client: &'a ApiClient,
}

impl<'a> LeaveService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Leave>> {
        self.client.get_json(LEAVES_PATH).await
    }

    pub async fn get(&self, id: i64) -> Result<Leave> {
        self.client.get_json(&format!("{LEAVES_PATH}/{id}")).await
    }

    pub async fn list_by_employee(&self, employee_id: i64) -> Result<Vec<Leave>> {
        self.client
            .get_json(&format!("{LEAVES_PATH}/employee/{employee_id}"))
            .await
    }

    pub async fn create(&self, leave: &NewLeave) -> Result<Saved<Leave>> {
        let response = self.client.post(LEAVES_PATH, leave).await?;
        Ok(Saved::from_response(response))
    }

    pub async fn update(&self, id: i64, patch: &LeavePatch) -> Result<Saved<Leave>> {
        let response = self
            .client
            .put(&format!("{LEAVES_PATH}/{id}"), patch)
            .await?;
        Ok(Saved::from_response(response))
    }

    pub async fn approve(&self, id: i64) -> Result<Saved<Leave>> {
        self.update(id, &LeavePatch::status("Approved")).await
    }

    pub async fn reject(&self, id: i64) -> Result<Saved<Leave>> {
        self.update(id, &LeavePatch::status("Rejected")).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("{LEAVES_PATH}/{id}")).await?;
        Ok(())
    }
}

pub fn pending_count(leaves: &[Leave]) -> usize {
    leaves.iter().filter(|leave| leave.is_pending()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use hrdesk_transport::{Method, RequestBody};

    #[tokio::test]
    async fn test_list_and_pending_count() {
        let (client, backend) = test_support::client();
        backend.on(
            Method::Get,
            LEAVES_PATH,
            200,
            r#"[{"id":1,"employeeId":1,"startDate":"2024-03-01","endDate":"2024-03-02","status":"PENDING"},
                {"id":2,"employeeId":2,"startDate":"2024-03-04","endDate":"2024-03-05","status":"Approved"},
                {"id":3,"employeeId":2,"startDate":"2024-04-01","endDate":"2024-04-01"}]"#,
        );

        let leaves = LeaveService::new(&client).list().await.unwrap();
        assert_eq!(leaves.len(), 3);
        assert_eq!(pending_count(&leaves), 1);
    }

    #[tokio::test]
    async fn test_approve_sends_status_patch() {
        let (client, backend) = test_support::client();
        backend.on(
            Method::Put,
            "/api/v1/leaves/1",
            200,
            r#"{"id":1,"startDate":"2024-03-01","endDate":"2024-03-02","status":"Approved"}"#,
        );

        let saved = LeaveService::new(&client).approve(1).await.unwrap();
        let leave = saved.into_record().unwrap();
        assert_eq!(leave.status.as_deref(), Some("Approved"));
        assert_eq!(
            backend.last_request().unwrap().body,
            RequestBody::Json(r#"{"status":"Approved"}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_create_with_confirmation_or_empty_body() {
        let (client, backend) = test_support::client();
        backend.on(Method::Post, LEAVES_PATH, 200, "Leave request submitted");
        backend.on(Method::Post, LEAVES_PATH, 204, "");

        let leave = NewLeave {
            employee_id: 1,
            start_date: "2024-03-01".to_string(),
            end_date: "2024-03-02".to_string(),
            leave_type: Some("Annual".to_string()),
            reason: None,
            status: None,
        };
        let service = LeaveService::new(&client);

        let first = service.create(&leave).await.unwrap();
        assert_eq!(first.message(), Some("Leave request submitted"));

        let second = service.create(&leave).await.unwrap();
        assert_eq!(second, Saved::Confirmed(None));
    }
}
