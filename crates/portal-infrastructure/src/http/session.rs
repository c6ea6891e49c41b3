use super::client::ApiClient;
use portal_core::auth::{LogoutRequest, SessionService};
use portal_core::error::Result;
use reqwest::Method;

const SERVICE: &str = "session";

/// Invalidates sessions with `POST {logout_path}`.
#[derive(Clone, Debug)]
pub struct HttpSessionService {
    client: ApiClient,
}

impl HttpSessionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl SessionService for HttpSessionService {
    async fn logout(&self, request: LogoutRequest) -> Result<()> {
        let path = self.client.api().logout_path.clone();
        self.client
            .send_json(SERVICE, Method::POST, &path, None, &request)
            .await
    }
}
