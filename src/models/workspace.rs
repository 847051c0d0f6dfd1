//! Workspace model
//!
//! The workspace is the root entity synchronized with the remote service:
//! it bundles the structural model, the derived views and the documentation
//! under a numeric workspace id. Persisting a workspace overwrites the
//! remote state wholesale; there is no merge.

use serde::{Deserialize, Serialize};

use super::documentation::Documentation;
use super::model::Model;
use super::views::Views;

/// URI path of a workspace on the remote service
pub fn workspace_uri(id: u64) -> String {
    format!("/workspace/{}", id)
}

/// Root entity synchronized with the Structurizr web API
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// The workspace id, assigned by the remote service
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Revision number maintained by the remote service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
    /// Last modified date in ISO 8601, e.g. "2018-09-08T12:40:03Z"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_modified_date: String,
    /// User who last modified the workspace
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_modified_user: String,
    /// Agent that last modified the workspace
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_modified_agent: String,
    #[serde(default)]
    pub model: Model,
    #[serde(default)]
    pub views: Views,
    #[serde(default)]
    pub documentation: Documentation,
}

impl Workspace {
    /// Create a workspace with the given remote id
    pub fn new(id: u64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// URI path of this workspace on the remote service
    pub fn uri(&self) -> String {
        workspace_uri(self.id)
    }

    /// Import a workspace from JSON
    pub fn from_json(json_content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_content)
    }

    /// Export the workspace to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Export the workspace to pretty JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
