//! Blocking client for the Structurizr web API
//!
//! The client signs each request (see [`super::auth`]), sends it and hands
//! back the raw response. Non-2xx statuses are data, not errors: the client
//! logs them but leaves status inspection to the caller. Only transport and
//! serialization failures surface as [`ApiError`].

use std::collections::HashMap;

use tracing::{info, warn};

use super::ApiError;
use super::auth::{
    CanonicalMessage, HttpMethod, authorization_header, content_md5_header,
};
use crate::models::workspace::{Workspace, workspace_uri};

/// Default base URL of the hosted service
pub const DEFAULT_BASE_URL: &str = "https://api.structurizr.com";

/// Connection settings for a [`StructurizrClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Workspace API key
    pub api_key: String,
    /// Workspace API secret, the HMAC key
    pub api_secret: String,
    /// Base URL, e.g. `https://api.structurizr.com`
    pub base_url: String,
    /// Whether to verify TLS certificates (self-hosted installations often
    /// run with certificates the system store does not trust)
    pub verify_tls: bool,
    /// Optional HTTP(S) proxy URL applied to all requests
    pub proxy: Option<String>,
}

impl ClientConfig {
    /// Create a config for the hosted service
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            verify_tls: true,
            proxy: None,
        }
    }

    /// Read the config from `STRUCTURIZR_API_KEY`, `STRUCTURIZR_API_SECRET`
    /// and optionally `STRUCTURIZR_URL`
    pub fn from_env() -> Result<Self, ApiError> {
        let api_key = std::env::var("STRUCTURIZR_API_KEY")
            .map_err(|_| ApiError::InvalidConfig("STRUCTURIZR_API_KEY is not set".to_string()))?;
        let api_secret = std::env::var("STRUCTURIZR_API_SECRET").map_err(|_| {
            ApiError::InvalidConfig("STRUCTURIZR_API_SECRET is not set".to_string())
        })?;
        let mut config = Self::new(api_key, api_secret);
        if let Ok(url) = std::env::var("STRUCTURIZR_URL") {
            config.base_url = url;
        }
        Ok(config)
    }

    /// Override the base URL (self-hosted installation)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Disable TLS certificate verification
    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    /// Route requests through the given proxy
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }
}

/// A fully signed request, ready to send
///
/// Produced by [`StructurizrClient::sign`]; header construction is pure so
/// the signing scheme can be exercised without a network.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub method: HttpMethod,
    /// Full URL (base URL plus URI path)
    pub url: String,
    pub body: String,
    /// Headers in insertion order
    pub headers: Vec<(String, String)>,
}

impl SignedRequest {
    /// Value of a header by name, if present
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response from the remote service
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers (first value per name)
    pub headers: HashMap<String, String>,
    /// Response body text
    pub body: String,
}

impl ApiResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON
    pub fn json(&self) -> Result<serde_json::Value, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Blocking client for one Structurizr installation
pub struct StructurizrClient {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

impl StructurizrClient {
    /// Build a client from the given config
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(!config.verify_tls);
        if let Some(proxy_url) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    /// The config this client was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Default nonce: current Unix time in milliseconds
    fn default_nonce() -> String {
        chrono::Utc::now().timestamp_millis().to_string()
    }

    /// Sign a request without sending it.
    ///
    /// `GET` requests carry no `Content-Type` or `Content-MD5` header; all
    /// requests carry `X-Authorization` and `Nonce`.
    pub fn sign(
        &self,
        method: HttpMethod,
        uri: &str,
        body: &str,
        nonce: Option<String>,
    ) -> SignedRequest {
        let nonce = nonce.unwrap_or_else(Self::default_nonce);
        let message = CanonicalMessage::new(method, uri, body, nonce.clone());

        let mut headers = vec![
            (
                "X-Authorization".to_string(),
                authorization_header(&self.config.api_key, &self.config.api_secret, &message),
            ),
            ("Nonce".to_string(), nonce),
        ];
        if method != HttpMethod::Get {
            headers.push(("Content-Type".to_string(), method.content_type().to_string()));
            headers.push(("Content-MD5".to_string(), content_md5_header(body)));
        }

        SignedRequest {
            method,
            url: format!("{}{}", self.config.base_url, uri),
            body: body.to_string(),
            headers,
        }
    }

    /// Sign and send a request, returning the raw response.
    ///
    /// A non-2xx status is returned to the caller unmodified; only
    /// transport failures produce an error. No retries are attempted.
    pub fn call(
        &self,
        method: HttpMethod,
        uri: &str,
        body: &str,
        nonce: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let signed = self.sign(method, uri, body, nonce);
        info!("HTTP {} {}", signed.method, signed.url);

        let mut request = match signed.method {
            HttpMethod::Get => self.http.get(&signed.url),
            HttpMethod::Put => self.http.put(&signed.url),
            HttpMethod::Post => self.http.post(&signed.url),
        };
        for (name, value) in &signed.headers {
            request = request.header(name, value);
        }
        if signed.method != HttpMethod::Get {
            request = request.body(signed.body.clone());
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.text()?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    /// Fetch the raw workspace JSON.
    ///
    /// The response is returned as-is and is not merged into any local
    /// [`Workspace`] tree; use [`Workspace::from_json`] on the body if a
    /// typed view is wanted.
    pub fn get_workspace(&self, id: u64) -> Result<ApiResponse, ApiError> {
        let response = self.call(HttpMethod::Get, &workspace_uri(id), "", None)?;
        if !response.is_success() {
            warn!(
                status = response.status,
                body = %response.body,
                "failed to fetch workspace {}",
                id
            );
        }
        Ok(response)
    }

    /// Serialize the workspace and PUT it, overwriting the remote state
    pub fn put_workspace(&self, workspace: &Workspace) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_string(workspace)?;
        let response = self.call(HttpMethod::Put, &workspace.uri(), &body, None)?;
        if response.is_success() {
            let revision = response
                .json()
                .ok()
                .and_then(|v| v.get("revision").and_then(|r| r.as_u64()));
            match revision {
                Some(revision) => info!(
                    "successfully updated workspace {} to revision {}",
                    workspace.id, revision
                ),
                None => info!("successfully updated workspace {}", workspace.id),
            }
        } else {
            warn!(
                status = response.status,
                body = %response.body,
                "failed to update workspace {}",
                workspace.id
            );
        }
        Ok(response)
    }
}
