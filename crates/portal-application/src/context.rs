//! Wiring of the portal's services from configuration.

use crate::profile_editing::ProfileEditSession;
use crate::route_guard::RouteGuard;
use crate::session_usecase::SessionUseCase;
use anyhow::{Context, Result};
use portal_core::auth::{IdentityService, RoleAuthorizer, SessionService, SessionTerminator};
use portal_core::config::PortalConfig;
use portal_core::navigation::{HistoryNavigator, Navigator};
use portal_core::profile::ProfileService;
use portal_core::session::{SessionReader, SessionStore};
use portal_core::storage::KeyValueStore;
use portal_infrastructure::{
    ApiClient, FileKeyValueStore, HttpIdentityService, HttpProfileService, HttpSessionService,
    PortalPaths,
};
use std::sync::Arc;

/// Everything a front end needs, built once per process.
pub struct PortalContext {
    config: PortalConfig,
    store: SessionStore,
    navigator: Arc<dyn Navigator>,
    identity: Arc<dyn IdentityService>,
    sessions: Arc<dyn SessionService>,
    profiles: Arc<dyn ProfileService>,
}

impl PortalContext {
    /// Builds the production context: file-backed session storage and HTTP
    /// services.
    pub fn from_config(config: PortalConfig, paths: &PortalPaths) -> Result<Self> {
        let session_file = paths
            .session_file_for(&config)
            .context("Failed to resolve session file")?;
        tracing::debug!("[Context] Session file: {}", session_file.display());
        let storage = Arc::new(FileKeyValueStore::new(session_file));

        let client = ApiClient::new(config.api.clone()).context("Failed to build API client")?;
        let identity = Arc::new(HttpIdentityService::new(client.clone()));
        let sessions = Arc::new(HttpSessionService::new(client.clone()));
        let profiles = Arc::new(HttpProfileService::new(client));

        Ok(Self::with_services(
            config, storage, identity, sessions, profiles,
        ))
    }

    /// Builds a context from explicit parts.
    pub fn with_services(
        config: PortalConfig,
        storage: Arc<dyn KeyValueStore>,
        identity: Arc<dyn IdentityService>,
        sessions: Arc<dyn SessionService>,
        profiles: Arc<dyn ProfileService>,
    ) -> Self {
        let store = SessionStore::new(storage).with_default_theme(&config.session.default_theme);
        Self {
            config,
            store,
            navigator: Arc::new(HistoryNavigator::new()),
            identity,
            sessions,
            profiles,
        }
    }

    /// Replaces the navigation target.
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn session_reader(&self) -> SessionReader {
        self.store.reader()
    }

    pub fn session_usecase(&self) -> SessionUseCase {
        let terminator = SessionTerminator::new(
            Arc::clone(&self.sessions),
            self.store.clone(),
            Arc::clone(&self.navigator),
        )
        .with_landing_route(&self.config.navigation.landing_route);
        SessionUseCase::new(self.store.clone(), terminator)
    }

    pub fn role_authorizer(&self) -> RoleAuthorizer {
        RoleAuthorizer::new(Arc::clone(&self.identity), self.store.reader())
    }

    pub fn route_guard(&self) -> RouteGuard {
        RouteGuard::new(self.role_authorizer())
    }

    pub fn profile_session(&self) -> ProfileEditSession {
        ProfileEditSession::new(Arc::clone(&self.profiles), self.store.reader())
    }
}
