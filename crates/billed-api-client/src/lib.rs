//! HTTP client for the Billed API.
//!
//! Provides a minimal client with configurable auth (Bearer token or
//! X-API-Key), generic request helpers, and the bill domain methods
//! (receipt upload, bill update, bill listing). The CLI uses this client
//! directly; the app services reach it through `billed_core::BillsStore`.

pub mod api;

use std::time::Duration;

use anyhow::{Context, Result};
use billed_core::error::StoreError;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Authentication strategy for the API.
#[derive(Clone, Debug)]
pub enum Auth {
    /// `Authorization: Bearer {token}`
    Bearer(String),
    /// `X-API-Key: {key}`
    XApiKey(String),
}

/// API version prefix (e.g. "/api/v1"). Set BILLED_API_VERSION to match the server.
pub fn api_prefix() -> String {
    let version = std::env::var("BILLED_API_VERSION").unwrap_or_else(|_| "v1".to_string());
    format!("/api/{}", version)
}

/// HTTP client for the Billed API with configurable auth.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth: Auth,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, auth: Auth) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| StoreError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Create client from environment: BILLED_API_URL (or API_URL) and
    /// JWT_TOKEN (or BILLED_API_KEY). Uses Bearer auth.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("BILLED_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| "http://localhost:5678".to_string());

        let token = std::env::var("JWT_TOKEN")
            .or_else(|_| std::env::var("BILLED_API_KEY"))
            .context("Missing token. Set JWT_TOKEN or BILLED_API_KEY")?;

        Ok(Self::new(base_url, Auth::Bearer(token))?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            Auth::Bearer(token) => request.header("Authorization", format!("Bearer {}", token)),
            Auth::XApiKey(key) => request.header("X-API-Key", key.as_str()),
        }
    }

    /// GET request. Deserializes the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        let url = self.build_url(path);
        let request = self.apply_auth(self.client.get(&url));
        Self::handle_response(send(request).await?).await
    }

    /// PATCH a JSON body and deserialize the response.
    pub(crate) async fn patch_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let url = self.build_url(path);
        let request = self.apply_auth(self.client.patch(&url).json(body));
        Self::handle_response(send(request).await?).await
    }

    /// POST a multipart form and deserialize the response.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, StoreError> {
        let url = self.build_url(path);
        let request = self.apply_auth(self.client.post(&url).multipart(form));
        Self::handle_response(send(request).await?).await
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, StoreError> {
    request
        .send()
        .await
        .map_err(|e| StoreError::Network(e.to_string()))
}
