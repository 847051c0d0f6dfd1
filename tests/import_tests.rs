use chrono::NaiveDate;
use structurizr_sdk::import::{DecisionImporter, ImportError, SectionImporter};
use structurizr_sdk::models::{
    Decision, DecisionStatus, Documentation, DocumentationSection, SoftwareSystem,
};

const ADR: &str = "\
# 2. Use a tile cache

> `Date: 2023-04-02`

> `Status: Proposed`

## Context

Rendering every tile on demand is too slow.

## Decision

Cache rendered tiles keyed by zoom level.
";

#[test]
fn test_decision_import_extracts_metadata() {
    let decision = DecisionImporter::import(ADR).unwrap();
    assert_eq!(decision.title, "2. Use a tile cache");
    assert_eq!(decision.status, DecisionStatus::Proposed);
    assert_eq!(decision.date, NaiveDate::from_ymd_opt(2023, 4, 2).unwrap());
    assert_eq!(decision.content, ADR);
    assert_eq!(decision.format, "Markdown");
}

#[test]
fn test_decision_without_title_is_tolerated() {
    let markdown = "> `Date: 2023-04-02`\n\n> `Status: accepted`\n\nNo heading here.\n";
    let decision = DecisionImporter::import(markdown).unwrap();
    assert_eq!(decision.title, "");
    assert_eq!(decision.status, DecisionStatus::Accepted);
}

#[test]
fn test_decision_without_status_fails() {
    let markdown = "# T\n\n> `Date: 2023-04-02`\n";
    match DecisionImporter::import(markdown) {
        Err(ImportError::ParseError(msg)) => assert!(msg.contains("status")),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_decision_without_date_fails() {
    let markdown = "# T\n\n> `Status: accepted`\n";
    assert!(DecisionImporter::import(markdown).is_err());
}

#[test]
fn test_section_import_demotes_nested_headings() {
    let section = SectionImporter::import("# System\n\n## Overview\n\n## Usage\n\n### Details\n");
    assert!(section.content.contains("### Overview"));
    assert!(section.content.contains("### Usage"));
    assert!(section.content.contains("#### Details"));
    assert!(!section.content.contains("\n## "));
}

#[test]
fn test_imported_documents_attach_to_elements() {
    let system = SoftwareSystem::new("Maps");
    let mut docs = Documentation::default();

    let mut section = SectionImporter::import("# Maps\n\n## Overview\n");
    section.documents(&system);
    docs.add_section(section);

    let mut decision = DecisionImporter::import(ADR).unwrap();
    decision.decision_for(&system);
    docs.add_decision(decision);

    assert_eq!(docs.sections[0].element_id, system.id);
    assert_eq!(docs.sections[0].title, "Maps");
    assert_eq!(docs.sections[0].order, 0);
    assert_eq!(docs.decisions[0].element_id, system.id);
}

#[test]
fn test_section_order_increments_within_one_documentation() {
    let mut docs = Documentation::default();
    docs.add_section(DocumentationSection::new("first"));
    docs.add_section(DocumentationSection::new("second"));
    docs.add_section(DocumentationSection::new("third"));

    let orders: Vec<u32> = docs.sections.iter().map(|s| s.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[test]
fn test_from_url_rejects_malformed_urls() {
    // fails before any network traffic, regardless of the TLS setting
    let err = SectionImporter::from_url("not a url", true).unwrap_err();
    assert!(matches!(err, ImportError::FetchError(_)));
    assert!(err.to_string().contains("not a url"));

    let err = DecisionImporter::from_url("not a url", false).unwrap_err();
    assert!(matches!(err, ImportError::FetchError(_)));
}

#[test]
fn test_decision_serializes_for_the_wire() {
    let mut decision = Decision::new(
        NaiveDate::from_ymd_opt(2023, 4, 2).unwrap(),
        DecisionStatus::Superseded,
        "Use a tile cache",
    );
    decision.content = "body".to_string();

    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["date"], "2023-04-02");
    assert_eq!(json["status"], "Superseded");
    assert_eq!(json["title"], "Use a tile cache");
}
