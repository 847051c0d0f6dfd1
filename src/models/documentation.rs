//! Documentation: Markdown sections and architecture decision records
//!
//! Sections are ordered by a counter owned by the `Documentation` value
//! (incremented on each insertion), so two documentation trees in the same
//! process never share ordering state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::element::Element;
use super::enums::DecisionStatus;

/// A Markdown documentation section attached to a model element
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "markdown_format")]
    pub format: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub element_id: String,
}

impl DocumentationSection {
    /// Create a section with the given Markdown content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            content: content.into(),
            format: markdown_format(),
            order: 0,
            element_id: String::new(),
        }
    }

    /// Attach this section to a model element, titling it after the element
    pub fn documents<E: Element + ?Sized>(&mut self, element: &E) {
        self.element_id = element.id().to_string();
        self.title = element.name().to_string();
    }
}

/// An architecture decision record attached to a model element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub date: NaiveDate,
    pub status: DecisionStatus,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "markdown_format")]
    pub format: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub element_id: String,
}

impl Decision {
    /// Create a decision record
    pub fn new(date: NaiveDate, status: DecisionStatus, title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            date,
            status,
            title: title.into(),
            content: String::new(),
            format: markdown_format(),
            element_id: String::new(),
        }
    }

    /// Attach this decision to a model element
    pub fn decision_for<E: Element + ?Sized>(&mut self, element: &E) {
        self.element_id = element.id().to_string();
    }
}

fn markdown_format() -> String {
    "Markdown".to_string()
}

/// The documentation bundle of a workspace
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Documentation {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<DocumentationSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decisions: Vec<Decision>,
    /// Order assigned to the next inserted section; not part of the wire
    /// format
    #[serde(skip)]
    next_order: u32,
}

// the order counter is bookkeeping, not content; two documentation trees
// with the same sections and decisions compare equal
impl PartialEq for Documentation {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections && self.decisions == other.decisions
    }
}

impl Documentation {
    /// Append a section, assigning it the next order number
    pub fn add_section(&mut self, mut section: DocumentationSection) -> &DocumentationSection {
        section.order = self.next_order;
        self.next_order += 1;
        self.sections.push(section);
        self.sections.last().expect("section was just pushed")
    }

    /// Append a decision record
    pub fn add_decision(&mut self, decision: Decision) -> &Decision {
        self.decisions.push(decision);
        self.decisions.last().expect("decision was just pushed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::element::SoftwareSystem;

    #[test]
    fn test_section_order_is_per_instance() {
        let mut docs_a = Documentation::default();
        let mut docs_b = Documentation::default();

        docs_a.add_section(DocumentationSection::new("one"));
        docs_a.add_section(DocumentationSection::new("two"));
        docs_b.add_section(DocumentationSection::new("other"));

        assert_eq!(docs_a.sections[0].order, 0);
        assert_eq!(docs_a.sections[1].order, 1);
        // a fresh Documentation starts counting from zero again
        assert_eq!(docs_b.sections[0].order, 0);
    }

    #[test]
    fn test_documents_titles_after_element() {
        let system = SoftwareSystem::new("Maps");
        let mut section = DocumentationSection::new("# Maps\n\ndetails");
        section.documents(&system);
        assert_eq!(section.element_id, system.id);
        assert_eq!(section.title, "Maps");
    }

    #[test]
    fn test_decision_wire_shape() {
        let system = SoftwareSystem::new("Maps");
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let mut decision = Decision::new(date, DecisionStatus::Accepted, "Use tiles");
        decision.decision_for(&system);

        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["date"], "2023-01-01");
        assert_eq!(json["status"], "Accepted");
        assert_eq!(json["format"], "Markdown");
        assert_eq!(json["elementId"], system.id);
    }

    #[test]
    fn test_section_default_format() {
        let section = DocumentationSection::new("body");
        assert_eq!(section.format, "Markdown");
    }
}
