//! Structural model: the enterprise, its people and software systems

use serde::{Deserialize, Serialize};

use super::element::{Person, SoftwareSystem};

/// The enterprise that owns the model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Enterprise {
    pub name: String,
}

impl Enterprise {
    /// Create a named enterprise
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The structural graph of the workspace
///
/// Holds exactly one enterprise, plus ordered sequences of people and
/// software systems. Relationships live on the elements themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(default)]
    pub enterprise: Enterprise,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub people: Vec<Person>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub software_systems: Vec<SoftwareSystem>,
}

impl Model {
    /// Create a model for the given enterprise
    pub fn new(enterprise: Enterprise) -> Self {
        Self {
            enterprise,
            people: Vec::new(),
            software_systems: Vec::new(),
        }
    }

    /// Add a person to the model
    pub fn add_person(&mut self, person: Person) -> &Person {
        self.people.push(person);
        self.people.last().expect("person was just pushed")
    }

    /// Add a software system to the model
    pub fn add_software_system(&mut self, system: SoftwareSystem) -> &SoftwareSystem {
        self.software_systems.push(system);
        self.software_systems
            .last()
            .expect("system was just pushed")
    }

    /// Look up a software system by exact id
    pub fn get_software_system(&self, id: &str) -> Option<&SoftwareSystem> {
        self.software_systems.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_wire_names() {
        let mut model = Model::new(Enterprise::new("ACME"));
        model.add_person(Person::new("Alice"));
        model.add_software_system(SoftwareSystem::new("Maps"));

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["enterprise"]["name"], "ACME");
        assert_eq!(json["people"].as_array().unwrap().len(), 1);
        assert_eq!(json["softwareSystems"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_get_software_system() {
        let mut model = Model::default();
        let id = model.add_software_system(SoftwareSystem::new("Maps")).id.clone();
        assert!(model.get_software_system(&id).is_some());
        assert!(model.get_software_system("sys_unknown").is_none());
    }
}
