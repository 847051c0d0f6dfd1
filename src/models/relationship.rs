//! Relationship model
//!
//! A relationship is a directed, described edge between two model elements.
//! It is owned by the source element's relationship list; the destination is
//! referenced by id only, never by a live object.

use serde::{Deserialize, Serialize};

use super::enums::InteractionStyle;
use super::id::relationship_id;

/// Directed edge between two elements of the model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Unique identifier, `{sourceId}_relatesto_{destId}_{suffix}`
    pub id: String,
    /// What the relationship means, e.g. "reads tiles from"
    #[serde(default)]
    pub description: String,
    /// Comma-separated tags
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tags: String,
    /// Id of the owning source element
    pub source_id: String,
    /// Id of the destination element (weak link, not an ownership edge)
    pub destination_id: String,
    /// Optional URL with more information
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Technology carrying the interaction, e.g. "HTTPS/JSON"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub technology: String,
    /// Synchronous or asynchronous interaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_style: Option<InteractionStyle>,
}

impl Relationship {
    /// Create a relationship between two element ids with a generated id
    pub fn between(
        source_id: impl Into<String>,
        destination_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let source_id = source_id.into();
        let destination_id = destination_id.into();
        Self {
            id: relationship_id(&source_id, &destination_id),
            description: description.into(),
            tags: String::new(),
            source_id,
            destination_id,
            url: String::new(),
            technology: String::new(),
            interaction_style: None,
        }
    }

    /// Set the technology label
    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = technology.into();
        self
    }

    /// Set the interaction style
    pub fn with_interaction_style(mut self, style: InteractionStyle) -> Self {
        self.interaction_style = Some(style);
        self
    }

    /// Set the tags string
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }
}
