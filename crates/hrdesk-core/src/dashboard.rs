//! Main dashboard state container
//!
//! Owns the single session context and the single authenticated client.
//! Every page-level operation of the dashboard goes through here.

use futures_util::future::try_join3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use hrdesk_navigation::{Navigator, Route};
use hrdesk_services::{
    pending_count, total_salary, AiService, AttendanceService, CompanyPatch, CompanyService,
    CompanyUpdate, EmployeeService, LeaveService, PayrollService,
};
use hrdesk_session::{
    ApiClient, RefreshOutcome, RegistrationData, SessionContext, SessionManager, SessionStatus,
    SessionStore, User,
};
use hrdesk_storage::Database;
use hrdesk_transport::{HttpBackend, ReqwestBackend, Transport};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

/// Headline numbers for the dashboard home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub employee_count: usize,
    pub total_salary: f64,
    pub pending_leaves: usize,
    pub payroll_count: usize,
}

pub struct Dashboard {
    config: Config,
    navigator: Arc<dyn Navigator>,
    session: SessionManager,
}

impl Dashboard {
    /// Open local storage and build the HTTP stack from `config`
    pub fn new(config: Config, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let db = Database::open(&config.database_path)?;
        let backend = ReqwestBackend::new(config.request_timeout)?;

        Ok(Self::with_backend(config, db, Arc::new(backend), navigator))
    }

    pub fn with_backend(
        config: Config,
        db: Database,
        backend: Arc<dyn HttpBackend>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let store = SessionStore::new(db);
        let transport = Transport::new(&config.api_base_url, backend, Arc::new(store.clone()));
        let context = SessionContext::new(store, navigator.clone());
        let session = SessionManager::new(ApiClient::new(transport, context));

        tracing::debug!(api = %config.api_base_url, "Dashboard created");

        Self {
            config,
            navigator,
            session,
        }
    }

    /// Restore any persisted session. Must run before pages are opened.
    pub fn initialize(&self) -> SessionStatus {
        self.session.bootstrap()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn client(&self) -> &ApiClient {
        self.session.client()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        Ok(self.session.login(email, password).await?)
    }

    pub async fn register(&self, data: &RegistrationData) -> Result<User> {
        Ok(self.session.register(data).await?)
    }

    pub fn logout(&self) {
        self.session.logout();
    }

    /// Navigate to `route`, sending unauthenticated users to login when the
    /// page is protected. Returns the page actually shown.
    pub fn open(&self, route: Route) -> Route {
        let target = if route.requires_auth() && !self.session.is_authenticated() {
            tracing::debug!(requested = %route, "Protected page without session");
            Route::Login
        } else {
            route
        };

        self.navigator.navigate(target);
        target
    }

    pub fn companies(&self) -> CompanyService<'_> {
        CompanyService::new(self.client())
    }

    pub fn employees(&self) -> EmployeeService<'_> {
        EmployeeService::new(self.client())
    }

    pub fn leaves(&self) -> LeaveService<'_> {
        LeaveService::new(self.client())
    }

    pub fn attendance(&self) -> AttendanceService<'_> {
        AttendanceService::new(self.client())
    }

    pub fn payrolls(&self) -> PayrollService<'_> {
        PayrollService::new(self.client())
    }

    pub fn ai(&self) -> AiService<'_> {
        AiService::new(self.client())
    }

    fn company_id(&self) -> Result<i64> {
        self.session
            .company()
            .map(|company| company.id)
            .ok_or(CoreError::NotAuthenticated)
    }

    /// Employees, leaves and payrolls fetched concurrently
    pub async fn overview(&self) -> Result<Overview> {
        let company_id = self.company_id()?;

        let employees = self.employees();
        let leaves = self.leaves();
        let payrolls = self.payrolls();
        let (employees, leaves, payrolls) = try_join3(
            employees.list_by_company(company_id),
            leaves.list(),
            payrolls.list(),
        )
        .await?;

        Ok(Overview {
            employee_count: employees.len(),
            total_salary: total_salary(&employees),
            pending_leaves: pending_count(&leaves),
            payroll_count: payrolls.len(),
        })
    }

    /// Save profile changes for the signed-in company, then re-read it so
    /// the session holds what the backend stored.
    pub async fn update_company(
        &self,
        patch: &CompanyPatch,
    ) -> Result<(CompanyUpdate, RefreshOutcome)> {
        let company_id = self.company_id()?;
        let update = self.companies().update(company_id, patch).await?;
        let refreshed = self.session.refresh_company().await;

        Ok((update, refreshed))
    }

    /// One-line AI summary of the overview; `None` when there is nothing to
    /// summarize.
    pub async fn insight(&self, overview: &Overview) -> Result<Option<String>> {
        if overview.employee_count == 0 {
            return Ok(None);
        }

        let question = format!(
            "Summarize this HR snapshot in one sentence: {} employees, total monthly salary {:.2}, {} pending leave requests, {} payroll records.",
            overview.employee_count,
            overview.total_salary,
            overview.pending_leaves,
            overview.payroll_count,
        );

        Ok(Some(self.ai().ask(&question).await?))
    }
}
