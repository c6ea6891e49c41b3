//! Session store over a key-value backend.
//!
//! `SessionStore` is the only writer: the login flow and the session
//! terminator hold one. Every other component receives a `SessionReader`,
//! which cannot mutate storage.

use super::model::{ACCESS_TOKEN_KEY, DEFAULT_THEME, IS_LOGGED_IN_KEY, Session, THEME_KEY};
use crate::error::{PortalError, Result};
use crate::storage::KeyValueStore;
use std::sync::Arc;

/// Read-only view of the session.
#[derive(Clone)]
pub struct SessionReader {
    storage: Arc<dyn KeyValueStore>,
    default_theme: String,
}

impl SessionReader {
    /// Returns the bearer token. Blank values count as absent.
    pub fn access_token(&self) -> Result<Option<String>> {
        Ok(self
            .storage
            .get(ACCESS_TOKEN_KEY)?
            .filter(|token| !token.trim().is_empty()))
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.storage.get(IS_LOGGED_IN_KEY)?.as_deref() == Some("true"))
    }

    /// Returns the theme preference, or the default theme if never set.
    pub fn theme(&self) -> Result<String> {
        Ok(self
            .storage
            .get(THEME_KEY)?
            .filter(|theme| !theme.is_empty())
            .unwrap_or_else(|| self.default_theme.clone()))
    }

    /// Reads all session fields at once.
    pub fn snapshot(&self) -> Result<Session> {
        Ok(Session {
            access_token: self.access_token()?,
            is_logged_in: self.is_logged_in()?,
            theme: self.theme()?,
        })
    }
}

/// Injectable session context with read/write/clear operations.
///
/// # Lifecycle
///
/// 1. `establish` is called by the login flow once a token has been issued.
/// 2. Readers consult the token for every authenticated request.
/// 3. `clear_preserving_theme` is called by the session terminator; it wipes
///    storage wholesale and re-seeds only the theme key.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    default_theme: String,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            default_theme: DEFAULT_THEME.to_string(),
        }
    }

    /// Overrides the theme written back when none was ever chosen.
    pub fn with_default_theme(mut self, theme: impl Into<String>) -> Self {
        self.default_theme = theme.into();
        self
    }

    pub fn default_theme(&self) -> &str {
        &self.default_theme
    }

    /// Returns a read-only view sharing the same backend.
    pub fn reader(&self) -> SessionReader {
        SessionReader {
            storage: Arc::clone(&self.storage),
            default_theme: self.default_theme.clone(),
        }
    }

    /// Records a freshly issued token and marks the session as logged in.
    pub fn establish(&self, access_token: &str) -> Result<()> {
        if access_token.trim().is_empty() {
            return Err(PortalError::invalid_input("access token must not be empty"));
        }
        self.storage.set(ACCESS_TOKEN_KEY, access_token)?;
        self.storage.set(IS_LOGGED_IN_KEY, "true")?;
        Ok(())
    }

    pub fn set_theme(&self, theme: &str) -> Result<()> {
        if theme.trim().is_empty() {
            return Err(PortalError::invalid_input("theme must not be empty"));
        }
        self.storage.set(THEME_KEY, theme)
    }

    /// Clears every key, then writes the theme back.
    ///
    /// The theme is read before the clear. If reading fails or no theme was
    /// set, the default theme is written. Returns the theme that was kept.
    pub fn clear_preserving_theme(&self) -> Result<String> {
        let theme = match self.storage.get(THEME_KEY) {
            Ok(Some(theme)) if !theme.is_empty() => theme,
            Ok(_) => self.default_theme.clone(),
            Err(e) => {
                tracing::warn!("[Session] Could not read theme before clear: {}", e);
                self.default_theme.clone()
            }
        };

        self.storage.clear()?;
        self.storage.set(THEME_KEY, &theme)?;
        Ok(theme)
    }
}
