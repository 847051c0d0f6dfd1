//! Architecture decision record importer
//!
//! Parses decision records written in the MADR-like Markdown convention:
//! a `# Title` heading plus blockquoted metadata lines of the form
//! ``> `Status: accepted` `` and ``> `Date: 2023-01-01` ``. Status and
//! date are mandatory; a record without a title is stored with an empty
//! one.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::ImportError;
use crate::models::documentation::Decision;
use crate::models::enums::DecisionStatus;

static STATUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^> `Status: (accepted|proposed|superseded|deprecated|rejected)")
        .expect("valid regex")
});
static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^> `Date: (\d{4}-\d{2}-\d{2})").expect("valid regex"));
static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)").expect("valid regex"));

/// Imports Markdown decision records
pub struct DecisionImporter;

impl DecisionImporter {
    /// Parse a Markdown decision record
    pub fn import(markdown: &str) -> Result<Decision, ImportError> {
        let status = STATUS
            .captures(markdown)
            .and_then(|c| DecisionStatus::from_token(&c[1]))
            .ok_or_else(|| {
                ImportError::ParseError("decision status cannot be parsed".to_string())
            })?;

        let date = DATE
            .captures(markdown)
            .and_then(|c| NaiveDate::parse_from_str(&c[1], "%Y-%m-%d").ok())
            .ok_or_else(|| ImportError::ParseError("decision date cannot be parsed".to_string()))?;

        let title = TITLE
            .captures(markdown)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default();

        let mut decision = Decision::new(date, status, title);
        decision.content = markdown.to_string();
        Ok(decision)
    }

    /// Fetch a Markdown decision record and import it
    pub fn from_url(url: &str, verify_tls: bool) -> Result<Decision, ImportError> {
        let text = super::fetch(url, verify_tls)?;
        Self::import(&text)
    }
}
