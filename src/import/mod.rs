//! Importers turning external Markdown into documentation model values

pub mod decision;
pub mod section;

use thiserror::Error;

/// Errors raised by the Markdown importers
#[derive(Error, Debug)]
pub enum ImportError {
    /// The Markdown did not carry the expected metadata
    #[error("Parse error: {0}")]
    ParseError(String),
    /// A remote document could not be fetched
    #[error("Fetch error: {0}")]
    FetchError(String),
}

pub use decision::DecisionImporter;
pub use section::SectionImporter;

/// Fetch a document over HTTP(S). With `verify_tls` false the certificate
/// is not checked, matching self-hosted installations with untrusted certs.
pub(crate) fn fetch(url: &str, verify_tls: bool) -> Result<String, ImportError> {
    let client = reqwest::blocking::Client::builder()
        .danger_accept_invalid_certs(!verify_tls)
        .build()
        .map_err(|e| ImportError::FetchError(format!("{}: {}", url, e)))?;
    client
        .get(url)
        .send()
        .and_then(|response| response.text())
        .map_err(|e| ImportError::FetchError(format!("{}: {}", url, e)))
}
