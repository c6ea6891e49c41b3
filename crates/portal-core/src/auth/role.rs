//! Role identifiers and authorization outcomes.

use crate::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The three user classes the placement portal serves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PortalRole {
    Student,
    Alumni,
    PlacementOfficer,
}

/// Role a guarded route requires.
///
/// Any non-empty identifier is accepted; roles are opaque to the portal and
/// compared exactly, including case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequiredRole(String);

impl RequiredRole {
    pub fn new(role: impl Into<String>) -> Result<Self> {
        let role = role.into();
        if role.trim().is_empty() {
            return Err(PortalError::invalid_input("required role must not be empty"));
        }
        Ok(Self(role))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison with a role resolved by the identity service.
    pub fn matches(&self, resolved: &str) -> bool {
        self.0 == resolved
    }
}

impl From<PortalRole> for RequiredRole {
    fn from(role: PortalRole) -> Self {
        Self(role.as_ref().to_string())
    }
}

impl FromStr for RequiredRole {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for RequiredRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a role check.
///
/// `Pending` is the state of a guarded route before its lookup completes.
/// `Allowed` and `Denied` are terminal for a single route mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Authorization {
    #[default]
    Pending,
    Allowed,
    Denied,
}

impl Authorization {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}
