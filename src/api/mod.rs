//! Structurizr web API client
//!
//! Request signing lives in [`auth`]; the blocking HTTP client in
//! [`client`].

pub mod auth;
pub mod client;

use thiserror::Error;

/// Errors raised by the API client
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or the response not read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// A body could not be serialized or parsed as JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The client configuration is unusable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub use auth::{CanonicalMessage, HttpMethod, authorization_header, content_md5_header};
pub use client::{ApiResponse, ClientConfig, SignedRequest, StructurizrClient, DEFAULT_BASE_URL};
