//! Employee service

use serde::{Deserialize, Serialize};

use hrdesk_session::ApiClient;

use crate::saved::Saved;
use crate::Result;

const EMPLOYEES_PATH: &str = "/api/v1/employees";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    pub company_id: i64,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>, company_id: i64) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
            position: None,
            department: None,
            salary: None,
            hire_date: None,
            company_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

pub struct EmployeeService<'a> {
    client: &'a ApiClient,
}

impl<'a> EmployeeService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_by_company(&self, company_id: i64) -> Result<Vec<Employee>> {
        self.client
            .get_json(&format!("{EMPLOYEES_PATH}/company/{company_id}"))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Employee> {
        self.client
            .get_json(&format!("{EMPLOYEES_PATH}/{id}"))
            .await
    }

    pub async fn create(&self, employee: &NewEmployee) -> Result<Saved<Employee>> {
        let response = self.client.post(EMPLOYEES_PATH, employee).await?;
        Ok(Saved::from_response(response))
    }

    pub async fn update(&self, id: i64, patch: &EmployeePatch) -> Result<Saved<Employee>> {
        let response = self
            .client
            .put(&format!("{EMPLOYEES_PATH}/{id}"), patch)
            .await?;
        Ok(Saved::from_response(response))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("{EMPLOYEES_PATH}/{id}"))
            .await?;
        tracing::info!(employee_id = id, "Deleted employee");
        Ok(())
    }
}

/// Sum of known salaries
pub fn total_salary(employees: &[Employee]) -> f64 {
    employees.iter().filter_map(|e| e.salary).sum()
}
