//! Identifier generation for model entities
//!
//! Ids follow the `{prefix}_{slug(name)}_{suffix}` convention. The suffix is
//! the first 8 hex characters of a UUIDv4, which keeps ids short while making
//! accidental collisions vanishingly unlikely.

use uuid::Uuid;

/// Create a URL-friendly slug from an element name
pub(crate) fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Random 8-hex-character suffix
pub(crate) fn random_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Generate an element id: `{prefix}_{slug(name)}_{suffix}`
pub(crate) fn element_id(prefix: &str, name: &str) -> String {
    format!("{}_{}_{}", prefix, slugify(name), random_suffix())
}

/// Generate a relationship id: `{sourceId}_relatesto_{destId}_{suffix}`
pub(crate) fn relationship_id(source_id: &str, destination_id: &str) -> String {
    format!(
        "{}_relatesto_{}_{}",
        source_id,
        destination_id,
        random_suffix()
    )
}
