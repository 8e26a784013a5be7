//! Person name extraction from a `Nome:` / `Nome completo:` label.

use super::patterns::NAME_LABEL;
use super::{FieldMatch, FieldMatcher};
use crate::models::record::COLUMN_NAME;

/// Name field matcher.
///
/// Takes the rest of the line after the first label, trimmed. Only the first
/// label occurrence is considered; if its value is blank the field is empty
/// even when a later label would have a value.
pub struct NameMatcher;

impl NameMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMatcher for NameMatcher {
    fn label(&self) -> &'static str {
        COLUMN_NAME
    }

    fn find(&self, text: &str) -> Option<FieldMatch> {
        let value = NAME_LABEL.captures(text)?.get(1)?;
        let raw = value.as_str();

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let start = value.start() + (raw.len() - raw.trim_start().len());
        Some(FieldMatch::new(trimmed, start, start + trimmed.len()))
    }
}

/// Extract the person name from text.
pub fn extract_name(text: &str) -> Option<String> {
    NameMatcher::new().find(text).map(|m| m.value)
}
