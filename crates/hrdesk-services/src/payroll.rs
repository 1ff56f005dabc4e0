//! Payroll service

use serde::{Deserialize, Serialize};

use hrdesk_session::ApiClient;

use crate::saved::Saved;
use crate::Result;

const PAYROLLS_PATH: &str = "/api/payrolls";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: i64,
    pub employee_id: i64,
    pub month: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowances: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deductions: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayroll {
    pub employee_id: i64,
    pub month: String,
    pub year: i32,
    pub basic_salary: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowances: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deductions: Option<f64>,
    pub net_salary: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
    pub status: String,
}

impl NewPayroll {
    /// New pending payroll; net salary is basic plus allowances minus
    /// deductions.
    pub fn pending(
        employee_id: i64,
        month: impl Into<String>,
        year: i32,
        basic_salary: f64,
        allowances: Option<f64>,
        deductions: Option<f64>,
    ) -> Self {
        let net_salary = basic_salary + allowances.unwrap_or(0.0) - deductions.unwrap_or(0.0);

        Self {
            employee_id,
            month: month.into(),
            year,
            basic_salary,
            allowances,
            deductions,
            net_salary,
            payment_date: None,
            status: "Pending".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowances: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deductions: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

pub struct PayrollService<'a> {
    client: &'a ApiClient,
}

impl<'a> PayrollService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Payroll>> {
        self.client.get_json(PAYROLLS_PATH).await
    }

    pub async fn get(&self, id: i64) -> Result<Payroll> {
        self.client.get_json(&format!("{PAYROLLS_PATH}/{id}")).await
    }

    pub async fn list_by_employee(&self, employee_id: i64) -> Result<Vec<Payroll>> {
        self.client
            .get_json(&format!("{PAYROLLS_PATH}/employee/{employee_id}"))
            .await
    }

    pub async fn create(&self, payroll: &NewPayroll) -> Result<Saved<Payroll>> {
        let response = self
            .client
            .post(&format!("{PAYROLLS_PATH}/add"), payroll)
            .await?;
        Ok(Saved::from_response(response))
    }

    pub async fn update(&self, id: i64, patch: &PayrollPatch) -> Result<Saved<Payroll>> {
        let response = self
            .client
            .put(&format!("{PAYROLLS_PATH}/update/{id}"), patch)
            .await?;
        Ok(Saved::from_response(response))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("{PAYROLLS_PATH}/{id}"))
            .await?;
        Ok(())
    }
}
