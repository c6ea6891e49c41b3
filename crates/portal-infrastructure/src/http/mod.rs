//! HTTP adapters for the identity, session and profile services.

mod client;
mod identity;
mod profile;
mod session;

pub use client::ApiClient;
pub use identity::HttpIdentityService;
pub use profile::HttpProfileService;
pub use session::HttpSessionService;
