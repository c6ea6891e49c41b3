use super::client::ApiClient;
use portal_core::auth::{IdentityService, RoleLookup};
use portal_core::error::Result;

const SERVICE: &str = "identity";

/// Resolves roles with `GET {role_path}`.
#[derive(Clone, Debug)]
pub struct HttpIdentityService {
    client: ApiClient,
}

impl HttpIdentityService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl IdentityService for HttpIdentityService {
    async fn lookup_role(&self, access_token: &str) -> Result<RoleLookup> {
        let path = self.client.api().role_path.clone();
        let body = self.client.get_json(SERVICE, &path, access_token).await?;
        let lookup: RoleLookup = serde_json::from_value(body)?;
        tracing::debug!("[Identity] Resolved role '{}'", lookup.role_name);
        Ok(lookup)
    }
}
