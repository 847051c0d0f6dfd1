//! Styling and branding: flat declarative records with defaults
//!
//! These carry no behavior beyond serialization; the remote service applies
//! them by tag when rendering.

use serde::{Deserialize, Serialize};

use super::enums::{Routing, Shape};

/// Style applied to elements carrying a tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    pub tag: String,
    #[serde(default = "ElementStyle::default_background")]
    pub background: String,
    #[serde(default = "ElementStyle::default_stroke")]
    pub stroke: String,
    #[serde(default = "ElementStyle::default_font_size")]
    pub font_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
}

impl ElementStyle {
    fn default_background() -> String {
        "#ffffff".to_string()
    }
    fn default_stroke() -> String {
        "#aaaaaa".to_string()
    }
    fn default_font_size() -> u32 {
        18
    }

    /// Create a style for the given tag with default colors
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            background: Self::default_background(),
            stroke: Self::default_stroke(),
            font_size: Self::default_font_size(),
            shape: None,
        }
    }

    /// Set the shape
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Set the background color
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }
}

/// Style applied to relationships carrying a tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipStyle {
    pub tag: String,
    /// Line thickness in pixels
    #[serde(default = "RelationshipStyle::default_thickness")]
    pub thickness: u32,
    #[serde(default = "RelationshipStyle::default_color")]
    pub color: String,
    #[serde(default)]
    pub dashed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<Routing>,
    /// Position of the annotation along the line, 0 (start) to 100 (end)
    #[serde(default = "RelationshipStyle::default_position")]
    pub position: u32,
    /// Opacity used when rendering the line, 0-100
    #[serde(default = "RelationshipStyle::default_opacity")]
    pub opacity: u32,
}

impl RelationshipStyle {
    fn default_thickness() -> u32 {
        2
    }
    fn default_color() -> String {
        "#aaaaaa".to_string()
    }
    fn default_position() -> u32 {
        50
    }
    fn default_opacity() -> u32 {
        80
    }

    /// Create a style for the given tag with default line settings
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            thickness: Self::default_thickness(),
            color: Self::default_color(),
            dashed: false,
            routing: None,
            position: Self::default_position(),
            opacity: Self::default_opacity(),
        }
    }

    /// Set the routing
    pub fn with_routing(mut self, routing: Routing) -> Self {
        self.routing = Some(routing);
        self
    }
}

/// Element and relationship styles of a workspace
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Styles {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<ElementStyle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<RelationshipStyle>,
}

/// Branding: a logo as a data URI
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Branding {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub logo: String,
}

/// View rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Configuration {
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub branding: Branding,
}
