//! Enumerated wire values for the Structurizr workspace JSON
//!
//! # Serde Casing Conventions
//!
//! The remote service expects every enumerated field to serialize as its
//! symbolic name, e.g. `"Internal"`, `"A2_Landscape"`, `"RoundedBox"`.
//! Variants therefore either derive their wire name directly (PascalCase
//! Rust names) or carry an explicit `#[serde(rename = ...)]` where the wire
//! name contains an underscore (paper sizes).

use serde::{Deserialize, Serialize};

/// Whether an element sits inside or outside the enterprise boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Internal,
    External,
    Unspecified,
}

/// Interaction style of a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionStyle {
    Synchronous,
    Asynchronous,
}

/// Rank direction used by automatic layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankDirection {
    TopBottom,
    BottomTop,
    LeftRight,
    RightLeft,
}

/// Paper size of a rendered diagram
///
/// Wire names keep the service's `{size}_{orientation}` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    #[serde(rename = "A6_Portrait")]
    A6Portrait,
    #[serde(rename = "A6_Landscape")]
    A6Landscape,
    #[serde(rename = "A5_Portrait")]
    A5Portrait,
    #[serde(rename = "A5_Landscape")]
    A5Landscape,
    #[serde(rename = "A4_Portrait")]
    A4Portrait,
    #[serde(rename = "A4_Landscape")]
    A4Landscape,
    #[serde(rename = "A3_Portrait")]
    A3Portrait,
    #[serde(rename = "A3_Landscape")]
    A3Landscape,
    #[serde(rename = "A2_Portrait")]
    A2Portrait,
    #[serde(rename = "A2_Landscape")]
    A2Landscape,
    #[serde(rename = "Letter_Portrait")]
    LetterPortrait,
    #[serde(rename = "Letter_Landscape")]
    LetterLandscape,
    #[serde(rename = "Legal_Portrait")]
    LegalPortrait,
    #[serde(rename = "Legal_Landscape")]
    LegalLandscape,
    #[serde(rename = "Slide_4_3")]
    Slide43,
    #[serde(rename = "Slide_16_9")]
    Slide169,
}

/// Routing of a rendered relationship line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Routing {
    Direct,
    Orthogonal,
}

/// Shape used when rendering an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Box,
    RoundedBox,
    Circle,
    Ellipse,
    Hexagon,
    Folder,
    Cylinder,
    Pipe,
    WebBrowser,
    MobileDevicePortrait,
    MobileDeviceLandscape,
    Person,
    Robot,
}

/// Lifecycle status of an architecture decision record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionStatus {
    Proposed,
    Accepted,
    Superseded,
    Deprecated,
    Rejected,
}

impl DecisionStatus {
    /// Parse a lowercase status token as found in ADR Markdown
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "proposed" => Some(DecisionStatus::Proposed),
            "accepted" => Some(DecisionStatus::Accepted),
            "superseded" => Some(DecisionStatus::Superseded),
            "deprecated" => Some(DecisionStatus::Deprecated),
            "rejected" => Some(DecisionStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionStatus::Proposed => write!(f, "Proposed"),
            DecisionStatus::Accepted => write!(f, "Accepted"),
            DecisionStatus::Superseded => write!(f, "Superseded"),
            DecisionStatus::Deprecated => write!(f, "Deprecated"),
            DecisionStatus::Rejected => write!(f, "Rejected"),
        }
    }
}
