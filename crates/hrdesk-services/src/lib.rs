//! HRDesk Domain Services
//!
//! Thin typed wrappers: each call is a fixed path and payload shape sent
//! through the session-aware `ApiClient`. Failures are `ApiError`s, and a
//! 401 from any of them has already ended the session by the time the
//! caller sees it.

mod ai;
mod attendance;
mod company;
mod employee;
mod leave;
mod payroll;
mod saved;
#[cfg(test)]
mod test_support;

pub use ai::{AiService, CandidateProfile};
pub use attendance::{Attendance, AttendanceService, NewAttendance};
pub use company::{CompanyPatch, CompanyService, CompanyUpdate};
pub use employee::{total_salary, Employee, EmployeePatch, EmployeeService, NewEmployee};
pub use leave::{pending_count, Leave, LeavePatch, LeaveService, NewLeave};
pub use payroll::{NewPayroll, Payroll, PayrollPatch, PayrollService};
pub use saved::Saved;

pub use hrdesk_transport::ApiError;

pub type Result<T> = std::result::Result<T, ApiError>;
