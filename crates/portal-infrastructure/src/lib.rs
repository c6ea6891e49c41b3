//! Infrastructure adapters for the placement portal.
//!
//! File-backed session storage, configuration loading, platform paths and
//! the HTTP implementations of the core service traits.

pub mod config_service;
pub mod http;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::http::{ApiClient, HttpIdentityService, HttpProfileService, HttpSessionService};
pub use crate::paths::PortalPaths;
pub use crate::storage::FileKeyValueStore;
