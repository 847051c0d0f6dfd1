//! Request signing for the Structurizr web API
//!
//! Every request carries an `X-Authorization` header computed from a
//! canonical message: the newline-joined method, URI, MD5 of the body,
//! content type and nonce, with a trailing newline. The HMAC-SHA256 of that
//! message is hex-encoded and the *hex string* is base64-encoded — not the
//! raw digest bytes. The same hex-then-base64 quirk applies to the
//! `Content-MD5` header. Both are required by the service's verification
//! scheme.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HTTP methods used by the remote protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
}

impl HttpMethod {
    /// Uppercase token used in the canonical message
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
        }
    }

    /// Content type of a request with this method: empty for GET, JSON
    /// otherwise
    pub fn content_type(&self) -> &'static str {
        match self {
            HttpMethod::Get => "",
            _ => "application/json; charset=UTF-8",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase hex MD5 of a request body
pub fn md5_hex(body: &str) -> String {
    let digest = Md5::digest(body.as_bytes());
    hex::encode(digest)
}

/// Lowercase hex HMAC-SHA256 of `message` under `secret`
pub fn hmac_hex(secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// The canonical form of a request, the input to the HMAC
#[derive(Debug, Clone)]
pub struct CanonicalMessage {
    pub method: HttpMethod,
    pub uri: String,
    pub body: String,
    pub nonce: String,
}

impl CanonicalMessage {
    /// Build the canonical message for a request
    pub fn new(
        method: HttpMethod,
        uri: impl Into<String>,
        body: impl Into<String>,
        nonce: impl Into<String>,
    ) -> Self {
        Self {
            method,
            uri: uri.into(),
            body: body.into(),
            nonce: nonce.into(),
        }
    }

    /// Lowercase hex MD5 of the body
    pub fn body_md5_hex(&self) -> String {
        md5_hex(&self.body)
    }

    /// The canonical digest string:
    /// `METHOD\nURI\nmd5hex\ncontent-type\nnonce\n`
    pub fn digest(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}\n",
            self.method.as_str(),
            self.uri,
            self.body_md5_hex(),
            self.method.content_type(),
            self.nonce
        )
    }
}

impl std::fmt::Display for CanonicalMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digest())
    }
}

/// `X-Authorization` header value: `{apikey}:{base64(hex(hmac))}`
pub fn authorization_header(api_key: &str, api_secret: &str, message: &CanonicalMessage) -> String {
    let signature = hmac_hex(api_secret, &message.digest());
    format!("{}:{}", api_key, BASE64.encode(signature.as_bytes()))
}

/// `Content-MD5` header value: base64 of the lowercase hex MD5 of the body
pub fn content_md5_header(body: &str) -> String {
    BASE64.encode(md5_hex(body).as_bytes())
}
