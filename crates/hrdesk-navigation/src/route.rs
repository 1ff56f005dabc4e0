//! Dashboard routes

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Login entry point
    Login,
    /// Company registration
    Register,
    /// Main authenticated view
    Dashboard,
    Employees,
    Attendance,
    Leaves,
    Payroll,
    /// Company profile
    Company,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Login,
        Route::Register,
        Route::Dashboard,
        Route::Employees,
        Route::Attendance,
        Route::Leaves,
        Route::Payroll,
        Route::Company,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Employees => "/employees",
            Route::Attendance => "/attendance",
            Route::Leaves => "/leaves",
            Route::Payroll => "/payroll",
            Route::Company => "/company",
        }
    }

    /// Whether the route is only reachable with an authenticated session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl std::str::FromStr for Route {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('/');
        let path = if trimmed.starts_with('/') {
            trimmed.to_lowercase()
        } else {
            format!("/{}", trimmed.to_lowercase())
        };

        Route::ALL
            .iter()
            .copied()
            .find(|route| route.path() == path)
            .ok_or_else(|| NavigationError::UnknownRoute(s.to_string()))
    }
}
