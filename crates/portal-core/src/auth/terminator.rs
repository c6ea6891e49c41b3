//! Session terminator (logout).
//!
//! Logout is "best-effort notify, unconditional local cleanup": the backend
//! is told about the logout in a detached task, while clearing local state and
//! leaving the protected view always happen, whatever the backend does.

use super::identity::{LogoutRequest, SessionService};
use crate::navigation::{LANDING_ROUTE, NavigationMode, Navigator};
use crate::session::SessionStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Handle to the in-flight logout notification.
///
/// Dropping it detaches the notification. Short-lived front ends (the CLI)
/// can `settle` it so the request is not cut off when the process exits.
#[derive(Debug)]
pub struct LogoutNotice {
    task: Option<JoinHandle<()>>,
}

impl LogoutNotice {
    /// True when a notification task was started.
    pub fn was_dispatched(&self) -> bool {
        self.task.is_some()
    }

    /// Waits up to `timeout` for the notification to finish.
    /// Returns `true` if it finished in time.
    pub async fn settle(self, timeout: Duration) -> bool {
        match self.task {
            Some(task) => tokio::time::timeout(timeout, task).await.is_ok(),
            None => true,
        }
    }
}

/// Performs logout.
#[derive(Clone)]
pub struct SessionTerminator {
    session_service: Arc<dyn SessionService>,
    store: SessionStore,
    navigator: Arc<dyn Navigator>,
    landing_route: String,
}

impl SessionTerminator {
    pub fn new(
        session_service: Arc<dyn SessionService>,
        store: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            session_service,
            store,
            navigator,
            landing_route: LANDING_ROUTE.to_string(),
        }
    }

    pub fn with_landing_route(mut self, route: impl Into<String>) -> Self {
        self.landing_route = route.into();
        self
    }

    pub fn landing_route(&self) -> &str {
        &self.landing_route
    }

    /// Logs the user out.
    ///
    /// 1. Dispatches the backend notification with the current token.
    /// 2. Clears local session state, keeping the theme.
    /// 3. Navigates to the landing route, replacing history.
    ///
    /// Steps 2 and 3 run from a drop guard, so they happen even if dispatching
    /// the notification panics. Nothing here returns an error.
    pub fn terminate(&self) -> LogoutNotice {
        let token = self.store.reader().access_token().unwrap_or_else(|e| {
            tracing::warn!("[Logout] Could not read access token: {}", e);
            None
        });

        let _cleanup = LocalCleanup {
            store: &self.store,
            navigator: self.navigator.as_ref(),
            landing_route: &self.landing_route,
        };

        self.dispatch_notice(token)
    }

    fn dispatch_notice(&self, jwt_token: Option<String>) -> LogoutNotice {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("[Logout] No async runtime; skipping backend notification");
            return LogoutNotice { task: None };
        };

        let service = Arc::clone(&self.session_service);
        let task = runtime.spawn(async move {
            match service.logout(LogoutRequest { jwt_token }).await {
                Ok(()) => tracing::debug!("[Logout] Backend acknowledged logout"),
                Err(e) => tracing::warn!("[Logout] Backend notification failed: {}", e),
            }
        });

        LogoutNotice { task: Some(task) }
    }
}

/// Clears local state and leaves the protected view when dropped.
struct LocalCleanup<'a> {
    store: &'a SessionStore,
    navigator: &'a dyn Navigator,
    landing_route: &'a str,
}

impl Drop for LocalCleanup<'_> {
    fn drop(&mut self) {
        match self.store.clear_preserving_theme() {
            Ok(theme) => tracing::info!("[Logout] Local session cleared (theme '{}' kept)", theme),
            Err(e) => tracing::error!("[Logout] Failed to clear local session: {}", e),
        }
        self.navigator
            .navigate(self.landing_route, NavigationMode::Replace);
    }
}
