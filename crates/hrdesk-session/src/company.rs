//! Company profile and the user view derived from it

use serde::{Deserialize, Serialize};

/// Authoritative company profile as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

impl Company {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: None,
            address: None,
            website: None,
            industry: None,
            size: None,
            registration_date: None,
            tax_id: None,
        }
    }
}

/// Signed-in user. The company account is the user, so every field
/// mirrors the company profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub company_id: i64,
    pub company_name: String,
}

impl From<&Company> for User {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id,
            email: company.email.clone(),
            name: company.name.clone(),
            company_id: company.id,
            company_name: company.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_mirrors_company() {
        let company = Company::new(7, "Acme", "a@b.com");
        let user = User::from(&company);

        assert_eq!(user.id, 7);
        assert_eq!(user.company_id, 7);
        assert_eq!(user.name, "Acme");
        assert_eq!(user.company_name, "Acme");
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn test_company_wire_format() {
        let mut company = Company::new(7, "Acme", "a@b.com");
        company.registration_date = Some("2024-01-15".to_string());

        let json = serde_json::to_value(&company).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "Acme",
                "email": "a@b.com",
                "registrationDate": "2024-01-15"
            })
        );

        // Email may be missing from older payloads
        let parsed: Company = serde_json::from_str(r#"{"id":3,"name":"Initech"}"#).unwrap();
        assert_eq!(parsed.email, "");
    }
}
