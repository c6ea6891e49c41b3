//! Navigation contract.
//!
//! The core never renders pages, but logout and the access-denied view both
//! need to send the user to the unauthenticated landing route.

use std::sync::Mutex;

/// Landing route used when no other is configured.
pub const LANDING_ROUTE: &str = "/login";

/// How a navigation affects history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Adds a history entry.
    Push,
    /// Replaces the current history entry, so back-navigation cannot reach it.
    Replace,
}

/// Front-end navigation hook.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str, mode: NavigationMode);
}

/// Navigator that keeps a history stack in memory.
///
/// Used by the command-line front end and in tests to observe whether a
/// previous view is still reachable through back-navigation.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    stack: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `route` as the only history entry.
    pub fn starting_at(route: impl Into<String>) -> Self {
        Self {
            stack: Mutex::new(vec![route.into()]),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    pub fn can_go_back(&self) -> bool {
        self.lock().len() > 1
    }

    /// Pops the current entry and returns the one now on top.
    pub fn back(&self) -> Option<String> {
        let mut stack = self.lock();
        if stack.len() > 1 {
            stack.pop();
        }
        stack.last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.stack.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: &str, mode: NavigationMode) {
        let mut stack = self.lock();
        if mode == NavigationMode::Replace {
            stack.pop();
        }
        stack.push(route.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_previous_entry() {
        let nav = HistoryNavigator::starting_at("/login");
        nav.navigate("/student/dashboard", NavigationMode::Push);

        assert_eq!(nav.current().as_deref(), Some("/student/dashboard"));
        assert!(nav.can_go_back());
        assert_eq!(nav.back().as_deref(), Some("/login"));
    }

    #[test]
    fn test_replace_hides_previous_entry() {
        let nav = HistoryNavigator::starting_at("/login");
        nav.navigate("/student/dashboard", NavigationMode::Push);
        nav.navigate(LANDING_ROUTE, NavigationMode::Replace);

        assert_eq!(nav.history(), vec!["/login", "/login"]);
        assert!(!nav.history().iter().any(|r| r == "/student/dashboard"));
    }

    #[test]
    fn test_replace_on_empty_history() {
        let nav = HistoryNavigator::new();
        nav.navigate("/login", NavigationMode::Replace);
        assert_eq!(nav.history(), vec!["/login"]);
        assert!(!nav.can_go_back());
    }
}
