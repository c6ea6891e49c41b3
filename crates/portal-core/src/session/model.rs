//! Session domain model.
//!
//! Represents the lightweight, client-local session: the bearer token issued
//! by the login flow plus a couple of flags the UI reads on every page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key for the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the logged-in flag.
pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";
/// Storage key for the theme preference. Survives logout.
pub const THEME_KEY: &str = "theme";
/// Theme used when none was ever chosen.
pub const DEFAULT_THEME: &str = "light";

/// Snapshot of the client-local session.
///
/// `Debug` redacts the token so snapshots can be logged safely.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque bearer token; `None` when logged out.
    pub access_token: Option<String>,
    pub is_logged_in: bool,
    pub theme: String,
}

impl Session {
    /// A logged-out session with the given theme.
    pub fn anonymous(theme: impl Into<String>) -> Self {
        Self {
            access_token: None,
            is_logged_in: false,
            theme: theme.into(),
        }
    }

    /// True when a token is present and the logged-in flag is set.
    pub fn is_authenticated(&self) -> bool {
        self.is_logged_in && self.access_token.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous(DEFAULT_THEME)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("is_logged_in", &self.is_logged_in)
            .field("theme", &self.theme)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        let session = Session::default();
        assert!(session.access_token.is_none());
        assert!(!session.is_logged_in);
        assert_eq!(session.theme, DEFAULT_THEME);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session {
            access_token: Some("secret-jwt".to_string()),
            is_logged_in: true,
            theme: "dark".to_string(),
        };
        let printed = format!("{:?}", session);
        assert!(!printed.contains("secret-jwt"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_serializes_with_storage_key_names() {
        let json = serde_json::to_value(Session::default()).unwrap();
        assert!(json.get("accessToken").is_some());
        assert!(json.get("isLoggedIn").is_some());
        assert!(json.get("theme").is_some());
    }
}
