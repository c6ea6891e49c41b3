//! Role authorizer.
//!
//! Decides whether the current session may enter a route requiring a given
//! role. Every failure mode collapses to `Denied`.

use super::identity::IdentityService;
use super::role::{Authorization, RequiredRole};
use crate::error::{PortalError, Result};
use crate::session::SessionReader;
use std::sync::Arc;

/// Resolves the caller's role through the identity service and compares it
/// with the role a route requires.
///
/// Results are never cached: each call issues exactly one lookup (or none
/// when there is no token). There is no retry.
#[derive(Clone)]
pub struct RoleAuthorizer {
    identity: Arc<dyn IdentityService>,
    session: SessionReader,
}

impl RoleAuthorizer {
    pub fn new(identity: Arc<dyn IdentityService>, session: SessionReader) -> Self {
        Self { identity, session }
    }

    /// Returns `Allowed` iff the resolved role equals `required` exactly.
    ///
    /// A missing token, transport failure, non-success status or malformed
    /// response all yield `Denied`.
    pub async fn authorize(&self, required: &RequiredRole) -> Authorization {
        match self.resolve_role().await {
            Ok(role) if required.matches(&role) => {
                tracing::debug!("[Auth] Role '{}' satisfies '{}'", role, required);
                Authorization::Allowed
            }
            Ok(role) => {
                tracing::info!("[Auth] Role '{}' does not satisfy '{}'", role, required);
                Authorization::Denied
            }
            Err(e) => {
                tracing::warn!("[Auth] Role lookup failed for '{}': {}", required, e);
                Authorization::Denied
            }
        }
    }

    async fn resolve_role(&self) -> Result<String> {
        let token = self
            .session
            .access_token()?
            .ok_or_else(|| PortalError::unauthorized("no access token in session"))?;
        let lookup = self.identity.lookup_role(&token).await?;
        Ok(lookup.role_name)
    }
}
