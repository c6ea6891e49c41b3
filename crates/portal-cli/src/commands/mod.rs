pub mod authorize;
pub mod config;
pub mod profile;
pub mod session;
