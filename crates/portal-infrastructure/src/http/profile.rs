use super::client::ApiClient;
use portal_core::error::Result;
use portal_core::profile::{ProfilePayload, ProfileService};
use reqwest::Method;

const SERVICE: &str = "profile";

/// Reads and replaces the caller's profile at `{profile_path}`.
#[derive(Clone, Debug)]
pub struct HttpProfileService {
    client: ApiClient,
}

impl HttpProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ProfileService for HttpProfileService {
    async fn fetch_profile(&self, access_token: &str) -> Result<ProfilePayload> {
        let path = self.client.api().profile_path.clone();
        let body = self.client.get_json(SERVICE, &path, access_token).await?;
        Ok(ProfilePayload::from_value(body))
    }

    async fn store_profile(&self, access_token: &str, payload: &ProfilePayload) -> Result<()> {
        let path = self.client.api().profile_path.clone();
        self.client
            .send_json(SERVICE, Method::PUT, &path, Some(access_token), payload)
            .await?;
        tracing::info!("[Profile] Stored profile");
        Ok(())
    }
}
