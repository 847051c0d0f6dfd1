//! # Structurizr SDK
//!
//! A client library for the Structurizr web API and workspace model.
//!
//! The [`models`] module holds the workspace tree: a structural model of
//! people, software systems, containers and components, the views derived
//! from it, and Markdown documentation with architecture decision records.
//! The [`api`] module signs and sends workspace requests over HTTPS using
//! the service's HMAC scheme, and [`import`] turns external Markdown
//! documents into documentation model values.
//!
//! ```no_run
//! use structurizr_sdk::api::{ClientConfig, StructurizrClient};
//! use structurizr_sdk::models::Workspace;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = StructurizrClient::new(ClientConfig::from_env()?)?;
//! let response = client.get_workspace(49053)?;
//! let workspace = Workspace::from_json(&response.body)?;
//! println!("{} at revision {:?}", workspace.name, workspace.revision);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod import;
pub mod models;

pub use api::{ApiError, ClientConfig, StructurizrClient};
pub use import::{DecisionImporter, ImportError, SectionImporter};
pub use models::{Model, Workspace};
