//! Authorization domain module.
//!
//! - `role`: Role identifiers and authorization outcomes
//! - `identity`: External identity and session service contracts
//! - `authorizer`: Route-level role checks (`RoleAuthorizer`)
//! - `terminator`: Logout with unconditional local cleanup (`SessionTerminator`)

mod authorizer;
mod identity;
mod role;
mod terminator;

pub use authorizer::RoleAuthorizer;
pub use identity::{IdentityService, LogoutRequest, RoleLookup, SessionService};
pub use role::{Authorization, PortalRole, RequiredRole};
pub use terminator::{LogoutNotice, SessionTerminator};
