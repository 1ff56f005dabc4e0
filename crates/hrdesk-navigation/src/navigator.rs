//! Navigator seam and the default history-keeping implementation

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::route::Route;

/// Owner of the active view.
///
/// The session layer calls this after login, logout and forced teardown.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);

    /// Route currently displayed, if any navigation happened yet
    fn current(&self) -> Option<Route>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub route: Route,
    pub visited_at: DateTime<Utc>,
}

/// Navigator that keeps an in-memory visit history.
///
/// Used by the application shell, and by tests to observe forced redirects.
pub struct HistoryNavigator {
    entries: Arc<RwLock<Vec<NavigationEntry>>>,
    max_entries: usize,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            max_entries: max_entries.max(1),
        }
    }

    pub fn history(&self) -> Vec<NavigationEntry> {
        self.entries.read().clone()
    }

    /// Number of times `route` was navigated to
    pub fn visits(&self, route: Route) -> usize {
        self.entries
            .read()
            .iter()
            .filter(|entry| entry.route == route)
            .count()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for HistoryNavigator {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            max_entries: self.max_entries,
        }
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        let mut entries = self.entries.write();
        entries.push(NavigationEntry {
            route,
            visited_at: Utc::now(),
        });

        if entries.len() > self.max_entries {
            let overflow = entries.len() - self.max_entries;
            entries.drain(0..overflow);
        }

        tracing::debug!(route = %route, "Navigated");
    }

    fn current(&self) -> Option<Route> {
        self.entries.read().last().map(|entry| entry.route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_navigator() {
        let navigator = HistoryNavigator::new();
        assert_eq!(navigator.current(), None);

        navigator.navigate(Route::Login);
        navigator.navigate(Route::Dashboard);
        navigator.navigate(Route::Employees);

        assert_eq!(navigator.current(), Some(Route::Employees));
        assert_eq!(navigator.visits(Route::Login), 1);
        assert_eq!(navigator.history().len(), 3);
    }

    #[test]
    fn test_history_is_bounded() {
        let navigator = HistoryNavigator::with_capacity(2);

        navigator.navigate(Route::Login);
        navigator.navigate(Route::Dashboard);
        navigator.navigate(Route::Payroll);

        let routes: Vec<Route> = navigator.history().iter().map(|e| e.route).collect();
        assert_eq!(routes, vec![Route::Dashboard, Route::Payroll]);
    }

    #[test]
    fn test_clones_share_history() {
        let navigator = HistoryNavigator::new();
        let shared = navigator.clone();

        shared.navigate(Route::Company);
        assert_eq!(navigator.current(), Some(Route::Company));
    }
}
