//! View family: renderable subsets of the model
//!
//! A view is a snapshot of the structural graph taken at derivation time.
//! It lists the element ids to display plus one relationship-view entry per
//! relationship owned by the added elements; later model mutations do not
//! flow into an already derived view.

use serde::{Deserialize, Serialize};

use super::element::{Component, Container, Element, Person, SoftwareSystem};
use super::enums::{PaperSize, RankDirection};
use super::id::slugify;
use super::model::Model;
use super::styles::Configuration;

/// Automatic layout settings for a view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AutomaticLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_direction: Option<RankDirection>,
    #[serde(default = "AutomaticLayout::default_rank_separation")]
    pub rank_separation: u32,
    #[serde(default = "AutomaticLayout::default_node_separation")]
    pub node_separation: u32,
    #[serde(default = "AutomaticLayout::default_edge_separation")]
    pub edge_separation: u32,
    #[serde(default = "default_true")]
    pub vertices: bool,
}

impl AutomaticLayout {
    fn default_rank_separation() -> u32 {
        150
    }
    fn default_node_separation() -> u32 {
        100
    }
    fn default_edge_separation() -> u32 {
        20
    }
}

impl Default for AutomaticLayout {
    fn default() -> Self {
        Self {
            rank_direction: None,
            rank_separation: Self::default_rank_separation(),
            node_separation: Self::default_node_separation(),
            edge_separation: Self::default_edge_separation(),
            vertices: true,
        }
    }
}

/// Reference to a model element included in a view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementRef {
    pub id: String,
}

impl ElementRef {
    /// Reference an element by id
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A relationship included in a view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelationshipView {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order: String,
    /// Position of the description along the line, 0 (start) to 100 (end)
    #[serde(default = "default_position")]
    pub position: u32,
}

impl RelationshipView {
    fn for_relationship(rel: &super::relationship::Relationship) -> Self {
        Self {
            id: rel.id.clone(),
            description: rel.description.clone(),
            order: String::new(),
            position: default_position(),
        }
    }
}

fn default_position() -> u32 {
    50
}

fn default_true() -> bool {
    true
}

/// Append an element ref plus one relationship view per owned relationship.
///
/// No dedup happens here; only the component view filters ids (see
/// [`ComponentView::add_component`]).
fn push_snapshot<E: Element + ?Sized>(
    elements: &mut Vec<ElementRef>,
    relationships: &mut Vec<RelationshipView>,
    element: &E,
) {
    elements.push(ElementRef::new(element.id()));
    for rel in element.relationships() {
        relationships.push(RelationshipView::for_relationship(rel));
    }
}

/// System landscape diagram: every system and person in the enterprise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemLandscapeView {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_size: Option<PaperSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_layout: Option<AutomaticLayout>,
    #[serde(default = "default_true")]
    pub enterprise_boundary_visible: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<ElementRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<RelationshipView>,
}

// the boundary is visible unless explicitly hidden, on fresh views and
// deserialized ones alike
impl Default for SystemLandscapeView {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            key: String::new(),
            paper_size: None,
            automatic_layout: None,
            enterprise_boundary_visible: true,
            elements: Vec::new(),
            relationships: Vec::new(),
        }
    }
}

impl SystemLandscapeView {
    /// Add a software system and its outgoing relationships
    pub fn add_software_system(&mut self, system: &SoftwareSystem) {
        push_snapshot(&mut self.elements, &mut self.relationships, system);
    }

    /// Add a person and their outgoing relationships
    pub fn add_person(&mut self, person: &Person) {
        push_snapshot(&mut self.elements, &mut self.relationships, person);
    }
}

/// Container diagram for one software system
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerView {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub software_system_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_size: Option<PaperSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_layout: Option<AutomaticLayout>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<ElementRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<RelationshipView>,
}

impl ContainerView {
    /// Add a container and its outgoing relationships.
    ///
    /// Appends unconditionally; adding the same container twice yields a
    /// duplicate element ref.
    pub fn add_container(&mut self, container: &Container) {
        push_snapshot(&mut self.elements, &mut self.relationships, container);
    }

    /// Add a bare element ref for an id whose element is not reachable,
    /// e.g. a relationship destination that lives in another system
    pub fn add_element_by_id(&mut self, id: impl Into<String>) {
        self.elements.push(ElementRef::new(id));
    }
}

/// Component diagram for one container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentView {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub container_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_size: Option<PaperSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_layout: Option<AutomaticLayout>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<ElementRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<RelationshipView>,
}

impl ComponentView {
    /// Add a component, its outgoing relationships, and an element ref for
    /// every relationship destination not yet in the view.
    ///
    /// Unlike the other view types this checks for an existing element ref
    /// before adding, so the element set stays free of duplicate ids.
    pub fn add_component(&mut self, component: &Component) {
        if !self.contains_element(&component.id) {
            self.elements.push(ElementRef::new(&component.id));
        }
        for rel in &component.relationships {
            self.relationships
                .push(RelationshipView::for_relationship(rel));
            if !self.contains_element(&rel.destination_id) {
                self.elements.push(ElementRef::new(&rel.destination_id));
            }
        }
    }

    /// Whether the view already references the given element id
    pub fn contains_element(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }
}

/// All views of a workspace plus rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Views {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub system_landscape_views: Vec<SystemLandscapeView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub container_views: Vec<ContainerView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub component_views: Vec<ComponentView>,
    #[serde(default)]
    pub configuration: Configuration,
}

impl Model {
    /// Derive the system landscape view: every software system and person,
    /// on A2 landscape paper, titled from the enterprise name
    pub fn create_system_landscape_view(&self) -> SystemLandscapeView {
        let mut view = SystemLandscapeView {
            title: format!("System Landscape Diagram for {}", self.enterprise.name),
            key: format!("SystemLandscapeView{}", self.enterprise.name),
            paper_size: Some(PaperSize::A2Landscape),
            ..SystemLandscapeView::default()
        };
        for system in &self.software_systems {
            view.add_software_system(system);
        }
        for person in &self.people {
            view.add_person(person);
        }
        view
    }
}

impl SoftwareSystem {
    /// Derive the container view: every owned container, plus the
    /// destination of every container relationship so cross-container edges
    /// show both endpoints.
    ///
    /// Destinations are weak id links; a destination inside this system is
    /// resolved and added with its own relationships, one outside it only
    /// contributes a bare element ref.
    pub fn create_container_view(&self) -> ContainerView {
        let mut view = ContainerView {
            title: format!("Container view for {}", self.name),
            key: slugify(&self.name),
            software_system_id: self.id.clone(),
            ..ContainerView::default()
        };
        for container in &self.containers {
            view.add_container(container);
            for rel in &container.relationships {
                match self.get_container(&rel.destination_id) {
                    Some(destination) => view.add_container(destination),
                    None => view.add_element_by_id(&rel.destination_id),
                }
            }
        }
        view
    }
}

impl Container {
    /// Derive the component view: every owned component, keyed by the
    /// slug of the container name
    pub fn create_component_view(&self) -> ComponentView {
        let mut view = ComponentView {
            title: format!("Component view for {}", self.name),
            key: slugify(&self.name),
            container_id: self.id.clone(),
            ..ComponentView::default()
        };
        for component in &self.components {
            view.add_component(component);
        }
        view
    }
}
