//! Markdown documentation section importer
//!
//! Imported Markdown is nested one level under the element heading, so
//! every `##` (and deeper) heading is demoted by one level before the
//! section is stored.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ImportError;
use crate::models::documentation::DocumentationSection;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\n?#{2})").expect("valid regex"));

/// Imports Markdown documents as documentation sections
pub struct SectionImporter;

impl SectionImporter {
    /// Build a section from Markdown text, demoting `##` headings to `###`
    pub fn import(markdown: &str) -> DocumentationSection {
        let content = HEADING.replace_all(markdown, "${1}#");
        DocumentationSection::new(content.into_owned())
    }

    /// Fetch a Markdown document and import it
    pub fn from_url(url: &str, verify_tls: bool) -> Result<DocumentationSection, ImportError> {
        let text = super::fetch(url, verify_tls)?;
        Ok(Self::import(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demotes_second_level_headings() {
        let section = SectionImporter::import("# Title\n\n## Context\n\nbody\n\n### Detail\n");
        assert!(section.content.contains("\n### Context"));
        assert!(section.content.contains("\n#### Detail"));
        // top-level headings are left alone
        assert!(section.content.starts_with("# Title"));
    }

    #[test]
    fn test_plain_text_unchanged() {
        let section = SectionImporter::import("no headings here");
        assert_eq!(section.content, "no headings here");
    }
}
