//! Profile service contract.

use super::record::ProfilePayload;
use crate::error::Result;

/// Remote storage of the authenticated user's profile.
#[async_trait::async_trait]
pub trait ProfileService: Send + Sync {
    /// Reads the profile of the user identified by `access_token`.
    async fn fetch_profile(&self, access_token: &str) -> Result<ProfilePayload>;

    /// Replaces the stored profile with `payload`.
    async fn store_profile(&self, access_token: &str, payload: &ProfilePayload) -> Result<()>;
}
