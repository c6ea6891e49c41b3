//! Shared HTTP client for the portal backend.

use portal_core::config::ApiConfig;
use portal_core::error::{PortalError, Result};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Thin wrapper over `reqwest::Client` bound to one `ApiConfig`.
///
/// Every failure is reported as `PortalError::Transport`, tagged with the
/// logical service name; non-success responses carry their status code.
/// Bodies that are not JSON surface as `Serialization` errors.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    api: ApiConfig,
}

impl ApiClient {
    pub fn new(api: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .map_err(|e| PortalError::config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, api })
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    pub fn endpoint(&self, path: &str) -> String {
        self.api.endpoint(path)
    }

    /// `GET`s `path` with a bearer token and returns the decoded JSON body.
    pub async fn get_json(
        &self,
        service: &'static str,
        path: &str,
        access_token: &str,
    ) -> Result<Value> {
        let request = self.request(Method::GET, path, Some(access_token))?;
        let response = Self::send(service, request).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| PortalError::transport(service, e.to_string()))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Sends `body` as JSON. The response body is drained and ignored.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        service: &'static str,
        method: Method,
        path: &str,
        access_token: Option<&str>,
        body: &B,
    ) -> Result<()> {
        let request = self.request(method, path, access_token)?.json(body);
        let response = Self::send(service, request).await?;
        let _ = response.bytes().await;
        Ok(())
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        access_token: Option<&str>,
    ) -> Result<RequestBuilder> {
        let mut request = self.client.request(method, self.endpoint(path));
        if let Some(token) = access_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .map_err(|_| PortalError::invalid_input("access token is not a valid header value"))?;
            request = request.header(AUTHORIZATION, value);
        }
        Ok(request)
    }

    async fn send(service: &'static str, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| PortalError::transport(service, e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<body unavailable>".to_string());
        Err(PortalError::status(service, status.as_u16(), body))
    }
}
