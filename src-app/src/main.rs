//! HRDesk - headless dashboard shell
//!
//! Restores the persisted session, optionally signs in from the
//! environment, and reports the dashboard overview.

use std::sync::Arc;

use anyhow::Context;
use hrdesk_core::{Config, Dashboard, HistoryNavigator, RefreshOutcome, Route, SessionStatus};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hrdesk_core::init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        api = %config.api_base_url,
        database = %config.database_path.display(),
        "Starting HRDesk"
    );

    let navigator = HistoryNavigator::new();
    let dashboard = Dashboard::new(config, Arc::new(navigator.clone()))
        .context("Failed to open dashboard")?;

    let mut status = dashboard.initialize();
    if status == SessionStatus::Unauthenticated {
        status = sign_in_from_env(&dashboard).await?;
    }

    match status {
        SessionStatus::Authenticated => report(&dashboard).await?,
        SessionStatus::Unauthenticated => {
            dashboard.open(Route::Dashboard);
            tracing::info!("No session; set HRDESK_EMAIL and HRDESK_PASSWORD to sign in");
        }
    }

    tracing::debug!(visits = navigator.history().len(), "Shutting down");
    Ok(())
}

async fn sign_in_from_env(dashboard: &Dashboard) -> anyhow::Result<SessionStatus> {
    let (Ok(email), Ok(password)) = (
        std::env::var("HRDESK_EMAIL"),
        std::env::var("HRDESK_PASSWORD"),
    ) else {
        return Ok(SessionStatus::Unauthenticated);
    };

    dashboard
        .login(&email, &password)
        .await
        .context("Sign-in failed")?;

    Ok(dashboard.session().status())
}

async fn report(dashboard: &Dashboard) -> anyhow::Result<()> {
    match dashboard.session().refresh_company().await {
        RefreshOutcome::Refreshed(company) => {
            tracing::info!(company_id = company.id, company = %company.name, "Signed in")
        }
        RefreshOutcome::KeptStale { company, error } => tracing::warn!(
            company_id = company.id,
            error = %error,
            "Using cached company profile"
        ),
        RefreshOutcome::NoSession => {
            tracing::info!("Session ended during refresh");
            return Ok(());
        }
    }

    let overview = dashboard
        .overview()
        .await
        .context("Failed to load dashboard overview")?;

    tracing::info!(
        employees = overview.employee_count,
        total_salary = overview.total_salary,
        pending_leaves = overview.pending_leaves,
        payrolls = overview.payroll_count,
        "Dashboard overview"
    );

    match dashboard.insight(&overview).await {
        Ok(Some(insight)) => tracing::info!(%insight, "AI summary"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "AI summary unavailable"),
    }

    Ok(())
}
