//! Model elements: people, software systems, containers and components
//!
//! Elements form a containment hierarchy (system ⊃ container ⊃ component)
//! and each element owns its outgoing relationships. Ids are generated at
//! construction time; see [`crate::models::id`] for the scheme.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::enums::Location;
use super::id::element_id;
use super::relationship::Relationship;

/// Error raised by model lookups
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("component {id} not found in container {container}")]
    ComponentNotFound { id: String, container: String },
}

/// Behavior shared by every element that can own outgoing relationships
pub trait Element {
    /// Stable identifier of the element
    fn id(&self) -> &str;
    /// Display name of the element
    fn name(&self) -> &str;
    /// Outgoing relationships owned by this element
    fn relationships(&self) -> &[Relationship];
    /// Mutable access to the owned relationships
    fn relationships_mut(&mut self) -> &mut Vec<Relationship>;

    /// Record a directed relationship from this element to `destination`.
    ///
    /// The relationship is owned by this element; the destination is kept
    /// as an id only. Returns a reference to the stored relationship so
    /// callers can inspect the generated id.
    fn relates_to<D: Element + ?Sized>(
        &mut self,
        destination: &D,
        description: impl Into<String>,
    ) -> &Relationship {
        let rel = Relationship::between(self.id(), destination.id(), description);
        self.relationships_mut().push(rel);
        self.relationships()
            .last()
            .expect("relationship was just pushed")
    }

    /// Record a prepared relationship, rewriting its endpoints to this
    /// element and `destination`.
    fn relates_to_with<D: Element + ?Sized>(
        &mut self,
        destination: &D,
        mut relationship: Relationship,
    ) -> &Relationship {
        relationship.id = super::id::relationship_id(self.id(), destination.id());
        relationship.source_id = self.id().to_string();
        relationship.destination_id = destination.id().to_string();
        self.relationships_mut().push(relationship);
        self.relationships()
            .last()
            .expect("relationship was just pushed")
    }
}

macro_rules! impl_element {
    ($ty:ty) => {
        impl Element for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn name(&self) -> &str {
                &self.name
            }
            fn relationships(&self) -> &[Relationship] {
                &self.relationships
            }
            fn relationships_mut(&mut self) -> &mut Vec<Relationship> {
                &mut self.relationships
            }
        }
    };
}

/// A person who uses the software systems in the model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "Person::default_tags")]
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

impl Person {
    fn default_tags() -> String {
        "Element,Person".to_string()
    }

    /// Create a person with a generated `per_` id
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: element_id("per", &name),
            name,
            description: String::new(),
            tags: Self::default_tags(),
            location: None,
            relationships: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

impl_element!(Person);

/// A code-level part of a container
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub name: String,
    #[serde(default = "Component::default_description")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub technology: String,
    #[serde(default = "default_element_tags")]
    pub tags: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

impl Component {
    fn default_description() -> String {
        "default description".to_string()
    }

    /// Create a component with a generated `cmp_` id
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: element_id("cmp", &name),
            name,
            description: Self::default_description(),
            technology: String::new(),
            tags: default_element_tags(),
            properties: HashMap::new(),
            relationships: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the technology label
    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = technology.into();
        self
    }
}

impl_element!(Component);

/// A deployable/runnable unit within a software system
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub id: String,
    pub name: String,
    #[serde(default = "Container::default_description")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub technology: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
    #[serde(default = "default_element_tags")]
    pub tags: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

impl Container {
    fn default_description() -> String {
        "default container description".to_string()
    }

    /// Create a container with a generated `cnt_` id
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: element_id("cnt", &name),
            name,
            description: Self::default_description(),
            technology: String::new(),
            properties: HashMap::new(),
            tags: default_element_tags(),
            url: String::new(),
            relationships: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the technology label
    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = technology.into();
        self
    }

    /// Add an owned component
    pub fn add_component(&mut self, component: Component) -> &Component {
        self.components.push(component);
        self.components.last().expect("component was just pushed")
    }

    /// Look up a component whose id *contains* the given needle.
    ///
    /// The match is deliberately a substring match, so a caller can search
    /// by the stable part of a generated id (e.g. `cmp_renderer`) without
    /// knowing the random suffix. Exact ids still match.
    pub fn get_component(&self, id: &str) -> Result<&Component, ModelError> {
        self.components
            .iter()
            .find(|c| c.id.contains(id))
            .ok_or_else(|| ModelError::ComponentNotFound {
                id: id.to_string(),
                container: self.name.clone(),
            })
    }

    /// Mutable variant of [`Container::get_component`]
    pub fn get_component_mut(&mut self, id: &str) -> Result<&mut Component, ModelError> {
        let container = self.name.clone();
        self.components
            .iter_mut()
            .find(|c| c.id.contains(id))
            .ok_or(ModelError::ComponentNotFound {
                id: id.to_string(),
                container,
            })
    }
}

impl_element!(Container);

/// A top-level software system in the model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareSystem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default = "default_element_tags")]
    pub tags: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub containers: Vec<Container>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

impl SoftwareSystem {
    /// Create a software system with a generated `sys_` id
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: element_id("sys", &name),
            name,
            description: String::new(),
            location: None,
            tags: default_element_tags(),
            containers: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Add an owned container
    pub fn add_container(&mut self, container: Container) -> &Container {
        self.containers.push(container);
        self.containers.last().expect("container was just pushed")
    }

    /// Look up an owned container by exact id
    pub fn get_container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }
}

impl_element!(SoftwareSystem);

fn default_element_tags() -> String {
    "Element".to_string()
}
