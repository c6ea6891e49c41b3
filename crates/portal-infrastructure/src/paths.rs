//! Unified path management for portal configuration and session files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/placement-portal/        # Config directory
//! └── config.toml                    # PortalConfig
//!
//! ~/.local/share/placement-portal/   # Data directory
//! └── session.json                   # Session key-value store
//! ```

use portal_core::config::PortalConfig;
use portal_core::error::PortalError;
use std::path::PathBuf;

/// Application directory name under the platform config/data roots.
pub const APP_DIR_NAME: &str = "placement-portal";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// No platform config directory could be determined.
    ConfigDirNotFound,
    /// No platform data directory could be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for PortalError {
    fn from(e: PathError) -> Self {
        PortalError::config(e.to_string())
    }
}

/// Resolves portal paths.
///
/// A base override replaces both platform roots, which keeps tests and
/// portable installs out of the user's home directory.
#[derive(Debug, Clone, Default)]
pub struct PortalPaths {
    base_override: Option<PathBuf>,
}

impl PortalPaths {
    pub fn new(base_override: Option<PathBuf>) -> Self {
        Self { base_override }
    }

    /// Returns the portal configuration directory (e.g. `~/.config/placement-portal/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base_override {
            return Ok(base.join("config"));
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the portal data directory (e.g. `~/.local/share/placement-portal/`).
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base_override {
            return Ok(base.join("data"));
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::DataDirNotFound)
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Default location of the session store.
    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("session.json"))
    }

    /// Session file location honoring `session.storage_file` from the config.
    pub fn session_file_for(&self, config: &PortalConfig) -> Result<PathBuf, PathError> {
        match &config.session.storage_file {
            Some(path) => Ok(path.clone()),
            None => self.session_file(),
        }
    }
}
