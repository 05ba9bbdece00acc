//! Typed client for the procurement REST backend.
//!
//! One module per backend resource. All business logic (RFP structuring,
//! email generation, proposal extraction, vendor scoring) lives behind these
//! endpoints; this layer only shapes requests and decodes responses.

pub mod email;
pub mod proposal;
pub mod recommendation;
pub mod rfp;
pub mod user;
pub mod vendor;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;

/// Standard User-Agent header for rfx API requests.
pub const USER_AGENT: &str = concat!("rfx/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client from the loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request failed: GET {url}"))?;
        Self::decode(response).await
    }

    async fn get_json_with_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Request failed: GET {url}"))?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Request failed: POST {url}"))?;
        Self::decode(response).await
    }

    async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let response = self
            .http
            .put(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Request failed: PUT {url}"))?;
        Self::decode(response).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("Request failed: DELETE {url}"))?;
        Self::decode(response).await
    }

    /// Checks the status and decodes the JSON body.
    ///
    /// Backend failures arrive as error statuses, never sentinel payloads,
    /// so a non-success status is surfaced with the response text attached.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = body.trim();
            if detail.is_empty() {
                bail!("Backend returned {status}");
            }
            bail!("Backend returned {status}: {detail}");
        }
        response
            .json::<T>()
            .await
            .context("Failed to decode backend response")
    }
}
