//! Session domain module.
//!
//! This module contains the client-side session model and the injectable
//! store that reads and writes it.
//!
//! # Module Structure
//!
//! - `model`: Session snapshot and storage keys (`Session`)
//! - `store`: Single-writer store and read-only view (`SessionStore`, `SessionReader`)
//!
//! # Usage
//!
//! ```ignore
//! use portal_core::session::{Session, SessionStore, SessionReader};
//! ```

mod model;
mod store;

// Re-export public API
pub use model::{ACCESS_TOKEN_KEY, DEFAULT_THEME, IS_LOGGED_IN_KEY, Session, THEME_KEY};
pub use store::{SessionReader, SessionStore};
