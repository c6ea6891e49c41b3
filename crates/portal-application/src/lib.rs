//! Application layer for the placement portal.
//!
//! Use cases that coordinate the core domain with infrastructure: login and
//! logout, per-route authorization and profile editing sessions.

pub mod context;
pub mod profile_editing;
pub mod route_guard;
pub mod session_usecase;

pub use context::PortalContext;
pub use profile_editing::{LoadState, ProfileEditSession};
pub use route_guard::{GuardView, RouteGuard};
pub use session_usecase::SessionUseCase;
