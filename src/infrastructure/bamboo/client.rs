//! Bamboo REST API client

use reqwest::{header, Client as ReqwestClient, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};

use super::errors::BambooApiError;
use super::types::ServerInfo;
use crate::domain::models::{ClientSettings, ResolvedConfig};

/// Path prefix of the Bamboo REST API
pub const API_PREFIX: &str = "rest/api/latest";

/// Credential-bearing handle to one Bamboo server.
///
/// Built once per successful configure and shared read-only by every
/// resource and data source. Construction performs no network I/O, so bad
/// hosts or credentials only show up on the first request.
pub struct BambooClient {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,

    /// Server base URL without trailing slash
    base_url: String,

    username: String,
    password: SecretString,
}

impl BambooClient {
    /// Build a client for the resolved connection settings
    ///
    /// # Errors
    /// Returns [`BambooApiError::ClientBuild`] if the HTTP client cannot be
    /// initialised.
    pub fn new(config: ResolvedConfig, settings: &ClientSettings) -> Result<Self, BambooApiError> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(BambooApiError::ClientBuild)?;

        let (host, username, password) = config.into_parts();
        let base_url = host.trim_end_matches('/').to_string();
        debug!(base_url = %base_url, username = %username, "bamboo client created");

        Ok(Self {
            http_client,
            base_url,
            username,
            password,
        })
    }

    /// Server base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// User the client authenticates as
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Absolute URL of a REST API path such as `plan` or `/info`
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{API_PREFIX}/{}",
            self.base_url,
            path.trim_start_matches('/')
        )
    }

    /// Authenticated JSON request against a REST API path
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, self.api_url(path))
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .header(header::ACCEPT, "application/json")
    }

    /// Version and state of the server.
    ///
    /// Cheapest authenticated call Bamboo offers; useful to check credentials.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn server_info(&self) -> Result<ServerInfo, BambooApiError> {
        let response = self.request(Method::GET, "info").send().await?;
        let body = check_status(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Body of a successful response, or the classified failure
async fn check_status(response: Response) -> Result<String, BambooApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read response body".to_string());

    if status.is_success() {
        Ok(body)
    } else {
        debug!(%status, "bamboo request failed");
        Err(BambooApiError::from_status(status, body))
    }
}

impl fmt::Debug for BambooClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BambooClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
