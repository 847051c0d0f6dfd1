//! Models module for the SDK
//!
//! Defines the workspace tree synchronized with the remote service:
//! the structural model (enterprise, people, systems, containers,
//! components, relationships), the derived views, styling and
//! documentation.

pub mod documentation;
pub mod element;
pub mod enums;
mod id;
pub mod model;
pub mod relationship;
pub mod styles;
pub mod views;
pub mod workspace;

pub use documentation::{Decision, Documentation, DocumentationSection};
pub use element::{Component, Container, Element, ModelError, Person, SoftwareSystem};
pub use enums::*;
pub use model::{Enterprise, Model};
pub use relationship::Relationship;
pub use styles::{Branding, Configuration, ElementStyle, RelationshipStyle, Styles};
pub use views::{
    AutomaticLayout, ComponentView, ContainerView, ElementRef, RelationshipView,
    SystemLandscapeView, Views,
};
pub use workspace::{Workspace, workspace_uri};
