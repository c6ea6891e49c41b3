//! Portal configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every field has a
//! default so a missing file or a partial file is always usable.

use crate::navigation::LANDING_ROUTE;
use crate::session::DEFAULT_THEME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PortalConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub navigation: NavigationConfig,
}

/// Endpoints of the identity, session and profile services.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub role_path: String,
    pub logout_path: String,
    pub profile_path: String,
    /// Per-request timeout applied by the HTTP client.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            role_path: "/auth/role".to_string(),
            logout_path: "/auth/logout".to_string(),
            profile_path: "/profile".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Joins `base_url` and `path` with exactly one slash between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Theme written back on logout when none was chosen.
    pub default_theme: String,
    /// Overrides the session storage file location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_file: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_theme: DEFAULT_THEME.to_string(),
            storage_file: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Unauthenticated entry point used by logout and the access-denied view.
    pub landing_route: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            landing_route: LANDING_ROUTE.to_string(),
        }
    }
}
