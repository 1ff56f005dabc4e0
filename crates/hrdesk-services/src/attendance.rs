//! Attendance service

use serde::{Deserialize, Serialize};

use hrdesk_session::ApiClient;

use crate::saved::Saved;
use crate::Result;

const ATTENDANCE_PATH: &str = "/api/v1/attendance";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
}

impl Attendance {
    /// Case-insensitive match on employee name or status
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|value| value.to_lowercase().contains(&term))
        };
        contains(&self.employee_name) || contains(&self.status)
    }
}

/// Daily attendance entry logged for the signed-in company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    pub employee_name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<String>,
    pub date: String,
    pub company_id: i64,
}

pub struct AttendanceService<'a> {
    client: &'a ApiClient,
}

impl<'a> AttendanceService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_by_company(&self, company_id: i64) -> Result<Vec<Attendance>> {
        self.client
            .get_json(&format!("{ATTENDANCE_PATH}/company/{company_id}"))
            .await
    }

    pub async fn list_by_employee(&self, employee_id: i64) -> Result<Vec<Attendance>> {
        self.client
            .get_json(&format!("{ATTENDANCE_PATH}/employee/{employee_id}"))
            .await
    }

    pub async fn log(&self, entry: &NewAttendance) -> Result<Saved<Attendance>> {
        let response = self.client.post(ATTENDANCE_PATH, entry).await?;
        Ok(Saved::from_response(response))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("{ATTENDANCE_PATH}/{id}"))
            .await?;
        Ok(())
    }
}
