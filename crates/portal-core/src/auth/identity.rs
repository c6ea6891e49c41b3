//! External identity and session service contracts.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Role-lookup response from the identity service.
///
/// `role_name` is required: a response without it is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleLookup {
    pub role_name: String,
}

/// Resolves the role of the caller identified by a bearer token.
#[async_trait::async_trait]
pub trait IdentityService: Send + Sync {
    /// Looks up the role for `access_token`.
    ///
    /// Transport failures, non-success statuses and malformed bodies are all
    /// returned as errors; callers decide how to degrade.
    async fn lookup_role(&self, access_token: &str) -> Result<RoleLookup>;
}

/// Logout notification body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub jwt_token: Option<String>,
}

/// Server-side session invalidation.
#[async_trait::async_trait]
pub trait SessionService: Send + Sync {
    /// Notifies the backend that the session identified by the request should end.
    /// The response body carries no meaning for the client.
    async fn logout(&self, request: LogoutRequest) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_request_serializes_null_token() {
        let body = serde_json::to_value(LogoutRequest { jwt_token: None }).unwrap();
        assert_eq!(body, serde_json::json!({ "jwt_token": null }));
    }

    #[test]
    fn test_role_lookup_requires_role_name() {
        let parsed: std::result::Result<RoleLookup, _> =
            serde_json::from_value(serde_json::json!({ "role": "student" }));
        assert!(parsed.is_err());

        let parsed: RoleLookup =
            serde_json::from_value(serde_json::json!({ "role_name": "student", "extra": 1 }))
                .unwrap();
        assert_eq!(parsed.role_name, "student");
    }
}
