//! Core domain of the placement portal.
//!
//! Session state, route-level role authorization, logout, and the editable
//! multi-section profile model. This crate performs no I/O of its own; remote
//! services, storage and navigation are reached through the traits it defines.

pub mod auth;
pub mod config;
pub mod error;
pub mod navigation;
pub mod profile;
pub mod session;
pub mod storage;

// Re-export common error type
pub use error::PortalError;
