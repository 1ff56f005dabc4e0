//! Login and registration payloads

use serde::{Deserialize, Serialize};

use hrdesk_transport::ApiError;

use crate::company::Company;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub tax_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Body returned by login and registration.
///
/// Current backends nest the profile under `company`; older ones answer
/// with a flat `companyId` and `name`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AuthResponse {
    /// Resolve the company profile; a missing email takes `account_email`.
    pub fn into_session(self, account_email: &str) -> Result<(String, Company), ApiError> {
        if self.token.is_empty() {
            return Err(ApiError::Decode("empty token in auth response".to_string()));
        }

        let mut company = match (self.company, self.company_id) {
            (Some(company), _) => company,
            (None, Some(id)) => Company::new(
                id,
                self.name.unwrap_or_default(),
                self.email.unwrap_or_default(),
            ),
            (None, None) => {
                return Err(ApiError::Decode(
                    "auth response carries no company".to_string(),
                ))
            }
        };

        if company.email.is_empty() {
            company.email = account_email.to_string();
        }

        Ok((self.token, company))
    }
}
