//! HRDesk Navigation
//!
//! Route table of the dashboard and the `Navigator` seam. The data layer
//! never navigates on its own; it asks a `Navigator` to do it.
//!
//! Routes:
//! - `/login`, `/register`: public entry points
//! - `/dashboard`, `/employees`, `/attendance`, `/leaves`, `/payroll`,
//!   `/company`: require an authenticated session

mod error;
mod navigator;
mod route;

pub use error::NavigationError;
pub use navigator::{HistoryNavigator, NavigationEntry, Navigator};
pub use route::Route;

pub type Result<T> = std::result::Result<T, NavigationError>;
