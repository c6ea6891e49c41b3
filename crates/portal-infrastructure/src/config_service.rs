//! Configuration service implementation.
//!
//! Loads `PortalConfig` from `config.toml`, applies environment overrides and
//! caches the result.

use crate::paths::PortalPaths;
use crate::storage::AtomicFile;
use portal_core::config::PortalConfig;
use portal_core::error::{PortalError, Result};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Overrides `api.base_url`.
pub const ENV_API_URL: &str = "PORTAL_API_URL";
/// Overrides the config file location.
pub const ENV_CONFIG_PATH: &str = "PORTAL_CONFIG";

type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Configuration service that loads and caches the portal configuration.
#[derive(Clone)]
pub struct ConfigService {
    paths: PortalPaths,
    env: EnvLookup,
    /// Cached configuration, loaded lazily.
    config: Arc<RwLock<Option<PortalConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the process environment.
    pub fn new(paths: PortalPaths) -> Self {
        Self::with_env(paths, |key| std::env::var(key).ok())
    }

    /// Creates a service with an explicit environment lookup.
    pub fn with_env<F>(paths: PortalPaths, env: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            paths,
            env: Arc::new(env),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn paths(&self) -> &PortalPaths {
        &self.paths
    }

    /// Path of the config file, honoring `PORTAL_CONFIG`.
    pub fn config_path(&self) -> Result<PathBuf> {
        if let Some(path) = self.env_value(ENV_CONFIG_PATH) {
            return Ok(PathBuf::from(path));
        }
        Ok(self.paths.config_file()?)
    }

    /// Returns the effective configuration, loading it on first access.
    ///
    /// A missing file yields defaults. A malformed file is a `Config` error.
    pub fn get_config(&self) -> Result<PortalConfig> {
        {
            let cached = self.config.read().map_err(poisoned)?;
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = self.load()?;

        let mut cache = self.config.write().map_err(poisoned)?;
        *cache = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut cache) = self.config.write() {
            *cache = None;
        }
    }

    /// Writes `config` to the config file and refreshes the cache.
    ///
    /// Environment overrides are not persisted; the file receives exactly
    /// what is passed in.
    pub fn save(&self, config: &PortalConfig) -> Result<PathBuf> {
        let path = self.config_path()?;
        AtomicFile::<PortalConfig>::toml(path.clone()).save(config)?;
        self.invalidate_cache();
        tracing::info!("[ConfigService] Saved configuration to {}", path.display());
        Ok(path)
    }

    /// Writes a default config file unless one already exists.
    ///
    /// Returns the path and whether a file was created.
    pub fn init(&self) -> Result<(PathBuf, bool)> {
        let path = self.config_path()?;
        if path.exists() {
            return Ok((path, false));
        }
        self.save(&PortalConfig::default())?;
        Ok((path, true))
    }

    fn load(&self) -> Result<PortalConfig> {
        let path = self.config_path()?;
        let file = AtomicFile::<PortalConfig>::toml(path.clone());

        let mut config = match file.load() {
            Ok(Some(config)) => {
                tracing::debug!("[ConfigService] Loaded {}", path.display());
                config
            }
            Ok(None) => {
                tracing::debug!(
                    "[ConfigService] No config at {}, using defaults",
                    path.display()
                );
                PortalConfig::default()
            }
            Err(e) => {
                return Err(PortalError::config(format!(
                    "Failed to load {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        if let Some(base_url) = self.env_value(ENV_API_URL) {
            tracing::debug!("[ConfigService] {} overrides api.base_url", ENV_API_URL);
            config.api.base_url = base_url;
        }

        Ok(config)
    }

    fn env_value(&self, key: &str) -> Option<String> {
        (self.env)(key).filter(|value| !value.trim().is_empty())
    }
}

impl std::fmt::Debug for ConfigService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigService")
            .field("paths", &self.paths)
            .finish_non_exhaustive()
    }
}

fn poisoned<T>(_: T) -> PortalError {
    PortalError::internal("config cache lock poisoned")
}
