//! Route guard: per-mount state machine around the role authorizer.
//!
//! Every `enter` is a new mount with its own generation number. A role check
//! that finishes after its mount was superseded (by `leave` or another
//! `enter`) is dropped instead of overwriting the newer state.

use portal_core::auth::{Authorization, RequiredRole, RoleAuthorizer};
use std::sync::Arc;
use tokio::sync::Mutex;

/// What the guarded route should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardView {
    /// Check in flight. Stays here for as long as the lookup hangs.
    Loading,
    /// Access granted.
    Content,
    /// Access refused; the view offers a logout action.
    AccessDenied,
}

impl From<Authorization> for GuardView {
    fn from(status: Authorization) -> Self {
        match status {
            Authorization::Pending => GuardView::Loading,
            Authorization::Allowed => GuardView::Content,
            Authorization::Denied => GuardView::AccessDenied,
        }
    }
}

impl std::fmt::Display for GuardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardView::Loading => write!(f, "Loading"),
            GuardView::Content => write!(f, "Content"),
            GuardView::AccessDenied => write!(f, "AccessDenied"),
        }
    }
}

#[derive(Debug, Default)]
struct GuardState {
    generation: u64,
    required: Option<RequiredRole>,
    status: Authorization,
}

/// Guards one route.
#[derive(Clone)]
pub struct RouteGuard {
    authorizer: RoleAuthorizer,
    state: Arc<Mutex<GuardState>>,
}

impl RouteGuard {
    pub fn new(authorizer: RoleAuthorizer) -> Self {
        Self {
            authorizer,
            state: Arc::new(Mutex::new(GuardState::default())),
        }
    }

    /// Mounts the route for `required` and runs the role check.
    ///
    /// Returns the applied outcome, or `None` if this mount was superseded
    /// before the check finished.
    pub async fn enter(&self, required: RequiredRole) -> Option<Authorization> {
        let generation = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            state.required = Some(required.clone());
            state.status = Authorization::Pending;
            state.generation
        };

        let outcome = self.authorizer.authorize(&required).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::debug!(
                "[RouteGuard] Discarding stale result for '{}' (mount {} superseded by {})",
                required,
                generation,
                state.generation
            );
            return None;
        }

        state.status = outcome;
        Some(outcome)
    }

    /// Unmounts the route. Any in-flight check becomes stale.
    pub async fn leave(&self) {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.required = None;
        state.status = Authorization::Pending;
    }

    pub async fn status(&self) -> Authorization {
        self.state.lock().await.status
    }

    pub async fn view(&self) -> GuardView {
        self.status().await.into()
    }

    /// Role of the current mount, if mounted.
    pub async fn required(&self) -> Option<RequiredRole> {
        self.state.lock().await.required.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::auth::{IdentityService, PortalRole, RoleLookup};
    use portal_core::error::{PortalError, Result};
    use portal_core::session::SessionStore;
    use portal_core::storage::InMemoryKeyValueStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// First lookup waits on `gate` and resolves `first`; later lookups
    /// resolve `rest` immediately.
    struct GatedIdentityService {
        gate: Arc<Notify>,
        first: &'static str,
        rest: &'static str,
        calls: AtomicUsize,
    }

    impl GatedIdentityService {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl IdentityService for GatedIdentityService {
        async fn lookup_role(&self, _access_token: &str) -> Result<RoleLookup> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let role = if call == 0 {
                self.gate.notified().await;
                self.first
            } else {
                self.rest
            };
            Ok(RoleLookup {
                role_name: role.to_string(),
            })
        }
    }

    struct FailingIdentityService;

    #[async_trait::async_trait]
    impl IdentityService for FailingIdentityService {
        async fn lookup_role(&self, _access_token: &str) -> Result<RoleLookup> {
            Err(PortalError::status("identity", 500, "boom"))
        }
    }

    fn logged_in_reader() -> portal_core::session::SessionReader {
        let store = SessionStore::new(Arc::new(InMemoryKeyValueStore::new()));
        store.establish("jwt").unwrap();
        store.reader()
    }

    fn gated(first: &'static str, rest: &'static str) -> (Arc<GatedIdentityService>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let identity = Arc::new(GatedIdentityService {
            gate: gate.clone(),
            first,
            rest,
            calls: AtomicUsize::new(0),
        });
        (identity, gate)
    }

    async fn wait_for_calls(identity: &GatedIdentityService, n: usize) {
        while identity.calls() < n {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_pending_then_allowed() {
        let (identity, gate) = gated("placement_officer", "placement_officer");
        let guard = RouteGuard::new(RoleAuthorizer::new(identity.clone(), logged_in_reader()));
        assert_eq!(guard.view().await, GuardView::Loading);

        let mounted = guard.clone();
        let check = tokio::spawn(async move {
            mounted
                .enter(RequiredRole::from(PortalRole::PlacementOfficer))
                .await
        });
        wait_for_calls(&identity, 1).await;
        assert_eq!(guard.view().await, GuardView::Loading);

        gate.notify_one();
        assert_eq!(check.await.unwrap(), Some(Authorization::Allowed));
        assert_eq!(guard.view().await, GuardView::Content);
    }

    #[tokio::test]
    async fn test_hung_lookup_stays_loading() {
        let (identity, _gate) = gated("student", "student");
        let guard = RouteGuard::new(RoleAuthorizer::new(identity.clone(), logged_in_reader()));

        let mounted = guard.clone();
        let check = tokio::spawn(async move {
            mounted.enter(RequiredRole::from(PortalRole::Student)).await
        });
        wait_for_calls(&identity, 1).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        assert_eq!(guard.status().await, Authorization::Pending);
        assert_eq!(guard.view().await, GuardView::Loading);
        check.abort();
    }

    #[tokio::test]
    async fn test_superseded_mount_result_is_discarded() {
        // Stale check would resolve Allowed; the newer mount is Denied.
        let (identity, gate) = gated("placement_officer", "student");
        let guard = RouteGuard::new(RoleAuthorizer::new(identity.clone(), logged_in_reader()));

        let first_mount = guard.clone();
        let stale = tokio::spawn(async move {
            first_mount
                .enter(RequiredRole::from(PortalRole::PlacementOfficer))
                .await
        });
        wait_for_calls(&identity, 1).await;

        let newer = guard
            .enter(RequiredRole::from(PortalRole::Alumni))
            .await;
        assert_eq!(newer, Some(Authorization::Denied));

        gate.notify_one();
        assert_eq!(stale.await.unwrap(), None);
        assert_eq!(guard.status().await, Authorization::Denied);
        assert_eq!(
            guard.required().await.map(|r| r.to_string()),
            Some("alumni".to_string())
        );
    }

    #[tokio::test]
    async fn test_leave_discards_in_flight_check() {
        let (identity, gate) = gated("student", "student");
        let guard = RouteGuard::new(RoleAuthorizer::new(identity.clone(), logged_in_reader()));

        let mounted = guard.clone();
        let check = tokio::spawn(async move {
            mounted.enter(RequiredRole::from(PortalRole::Student)).await
        });
        wait_for_calls(&identity, 1).await;

        guard.leave().await;
        gate.notify_one();

        assert_eq!(check.await.unwrap(), None);
        assert_eq!(guard.view().await, GuardView::Loading);
        assert!(guard.required().await.is_none());
    }

    #[tokio::test]
    async fn test_remount_rechecks_without_memoization() {
        let (identity, gate) = gated("student", "placement_officer");
        let guard = RouteGuard::new(RoleAuthorizer::new(identity.clone(), logged_in_reader()));
        let role = RequiredRole::from(PortalRole::PlacementOfficer);

        gate.notify_one();
        assert_eq!(guard.enter(role.clone()).await, Some(Authorization::Denied));
        assert_eq!(guard.view().await, GuardView::AccessDenied);

        assert_eq!(guard.enter(role).await, Some(Authorization::Allowed));
        assert_eq!(guard.view().await, GuardView::Content);
    }

    #[tokio::test]
    async fn test_lookup_failure_renders_access_denied() {
        let guard = RouteGuard::new(RoleAuthorizer::new(
            Arc::new(FailingIdentityService),
            logged_in_reader(),
        ));

        let outcome = guard.enter(RequiredRole::from(PortalRole::Student)).await;
        assert_eq!(outcome, Some(Authorization::Denied));
        assert_eq!(guard.view().await, GuardView::AccessDenied);
    }
}
