//! Session use case: login, logout and session inspection.
//!
//! `SessionUseCase` is one of the two holders of a writable `SessionStore`
//! (the other being the `SessionTerminator` it owns).

use anyhow::{Context, Result};
use portal_core::auth::{LogoutNotice, SessionTerminator};
use portal_core::session::{Session, SessionStore};

pub struct SessionUseCase {
    store: SessionStore,
    terminator: SessionTerminator,
}

impl SessionUseCase {
    pub fn new(store: SessionStore, terminator: SessionTerminator) -> Self {
        Self { store, terminator }
    }

    /// Records a token issued by the identity provider.
    pub fn login(&self, access_token: &str) -> Result<()> {
        self.store
            .establish(access_token)
            .context("Failed to establish session")?;
        tracing::info!("[Session] Logged in");
        Ok(())
    }

    /// Runs the session terminator. Never fails.
    pub fn logout(&self) -> LogoutNotice {
        tracing::info!("[Session] Logging out");
        self.terminator.terminate()
    }

    pub fn status(&self) -> Result<Session> {
        self.store
            .reader()
            .snapshot()
            .context("Failed to read session")
    }

    pub fn set_theme(&self, theme: &str) -> Result<()> {
        self.store
            .set_theme(theme)
            .with_context(|| format!("Failed to set theme '{}'", theme))?;
        tracing::info!("[Session] Theme set to '{}'", theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::auth::{LogoutRequest, SessionService};
    use portal_core::error::Result as PortalResult;
    use portal_core::navigation::{HistoryNavigator, LANDING_ROUTE};
    use portal_core::storage::InMemoryKeyValueStore;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Default)]
    struct MockSessionService {
        requests: Mutex<Vec<LogoutRequest>>,
    }

    #[async_trait::async_trait]
    impl SessionService for MockSessionService {
        async fn logout(&self, request: LogoutRequest) -> PortalResult<()> {
            self.requests.lock().unwrap().push(request);
            Ok(())
        }
    }

    fn usecase() -> (SessionUseCase, Arc<MockSessionService>, Arc<HistoryNavigator>) {
        let store = SessionStore::new(Arc::new(InMemoryKeyValueStore::new()));
        let service = Arc::new(MockSessionService::default());
        let navigator = Arc::new(HistoryNavigator::starting_at("/dashboard"));
        let terminator = SessionTerminator::new(service.clone(), store.clone(), navigator.clone());
        (SessionUseCase::new(store, terminator), service, navigator)
    }

    #[tokio::test]
    async fn test_login_logout_cycle() {
        let (usecase, service, navigator) = usecase();

        usecase.login("jwt-9").unwrap();
        usecase.set_theme("dark").unwrap();
        assert!(usecase.status().unwrap().is_authenticated());

        let notice = usecase.logout();
        assert!(notice.settle(Duration::from_secs(1)).await);

        let session = usecase.status().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.theme, "dark");
        assert_eq!(navigator.current().as_deref(), Some(LANDING_ROUTE));
        assert_eq!(
            service.requests.lock().unwrap()[0].jwt_token.as_deref(),
            Some("jwt-9")
        );
    }

    #[test]
    fn test_login_rejects_blank_token() {
        let (usecase, _, _) = usecase();
        assert!(usecase.login("  ").is_err());
        assert!(!usecase.status().unwrap().is_logged_in);
    }
}
