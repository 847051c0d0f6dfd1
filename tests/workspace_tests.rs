use structurizr_sdk::models::{
    Component, Container, DocumentationSection, Element, ElementStyle, Enterprise, Person, Shape,
    SoftwareSystem, Workspace,
};

fn sample_workspace() -> Workspace {
    let mut workspace = Workspace::new(49053, "Maps", "Online mapping platform");
    workspace.model.enterprise = Enterprise::new("ACME");

    let mut maps = SoftwareSystem::new("Maps");
    let mut api = Container::new("API").with_technology("Rust");
    api.add_component(Component::new("Renderer"));
    maps.add_container(api);

    let mut alice = Person::new("Alice");
    alice.relates_to(&maps, "looks up directions using");

    workspace.model.add_software_system(maps);
    workspace.model.add_person(alice);

    let landscape = workspace.model.create_system_landscape_view();
    workspace.views.system_landscape_views.push(landscape);
    let container_view = workspace.model.software_systems[0].create_container_view();
    workspace.views.container_views.push(container_view);
    let component_view =
        workspace.model.software_systems[0].containers[0].create_component_view();
    workspace.views.component_views.push(component_view);

    workspace
        .views
        .configuration
        .styles
        .elements
        .push(ElementStyle::new("Person").with_shape(Shape::Person));

    let mut section = DocumentationSection::new("# Maps\n\nOverview.");
    section.documents(&workspace.model.software_systems[0]);
    workspace.documentation.add_section(section);

    workspace
}

#[test]
fn test_workspace_roundtrips_through_json() {
    let workspace = sample_workspace();
    let json = workspace.to_json().unwrap();
    let parsed = Workspace::from_json(&json).unwrap();

    assert_eq!(parsed, workspace);
}

#[test]
fn test_workspace_wire_structure() {
    let workspace = sample_workspace();
    let json = serde_json::to_value(&workspace).unwrap();

    assert_eq!(json["id"], 49053);
    assert_eq!(json["model"]["enterprise"]["name"], "ACME");
    assert_eq!(
        json["model"]["softwareSystems"][0]["containers"][0]["technology"],
        "Rust"
    );
    assert_eq!(
        json["views"]["systemLandscapeViews"][0]["key"],
        "SystemLandscapeViewACME"
    );
    assert_eq!(json["views"]["containerViews"][0]["key"], "maps");
    assert_eq!(json["views"]["componentViews"][0]["key"], "api");
    assert_eq!(
        json["views"]["configuration"]["styles"]["elements"][0]["shape"],
        "Person"
    );
    assert_eq!(json["documentation"]["sections"][0]["title"], "Maps");
}

#[test]
fn test_pretty_json_parses_back() {
    let workspace = sample_workspace();
    let pretty = workspace.to_json_pretty().unwrap();
    let parsed = Workspace::from_json(&pretty).unwrap();
    assert_eq!(parsed.id, workspace.id);
    assert_eq!(parsed.views.container_views.len(), 1);
}

#[test]
fn test_empty_remote_workspace_parses() {
    let remote = r#"{
        "id": 49053,
        "name": "Workspace 49053",
        "description": "An empty workspace.",
        "revision": 3,
        "lastModifiedDate": "2019-11-25T14:19:48Z",
        "lastModifiedAgent": "structurizr-web",
        "model": {},
        "documentation": {},
        "views": {"configuration": {"branding": {}, "styles": {}}}
    }"#;
    let workspace = Workspace::from_json(remote).unwrap();

    assert_eq!(workspace.revision, Some(3));
    assert_eq!(workspace.last_modified_agent, "structurizr-web");
    assert!(workspace.model.software_systems.is_empty());
    assert!(workspace.documentation.sections.is_empty());
}
