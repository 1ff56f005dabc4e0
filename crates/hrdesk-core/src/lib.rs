//! HRDesk Core
//!
//! Central coordination layer for the HR dashboard client: configuration,
//! logging, and the `Dashboard` container that wires storage, transport,
//! session and domain services together.

mod config;
mod dashboard;
mod error;

pub use config::{Config, DEFAULT_API_BASE_URL};
pub use dashboard::{Dashboard, Overview};
pub use error::CoreError;

// Re-export core components
pub use hrdesk_navigation::{HistoryNavigator, NavigationError, Navigator, Route};
pub use hrdesk_services::{
    AiService, Attendance, AttendanceService, CandidateProfile, CompanyPatch, CompanyService,
    CompanyUpdate, Employee, EmployeePatch, EmployeeService, Leave, LeavePatch, LeaveService,
    NewAttendance, NewEmployee, NewLeave, NewPayroll, Payroll, PayrollPatch, PayrollService, Saved,
};
pub use hrdesk_session::{
    ApiClient, Company, RefreshOutcome, RegistrationData, SessionError, SessionManager,
    SessionStatus, User,
};
pub use hrdesk_storage::{Database, StorageError};
pub use hrdesk_transport::{ApiError, ApiResponse, HttpBackend, Method, ReqwestBackend};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
