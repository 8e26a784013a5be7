//! Date token extraction.

use super::patterns::DATE_PATTERN;
use super::{find_digit_bounded, FieldMatch, FieldMatcher};
use crate::models::record::COLUMN_DATE;

/// Date field matcher.
///
/// Matches `dd/mm/yyyy`, `dd-mm-yyyy` and the mixed forms. Values are returned
/// verbatim; `99/99/0000` is a match.
pub struct DateMatcher;

impl DateMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMatcher for DateMatcher {
    fn label(&self) -> &'static str {
        COLUMN_DATE
    }

    fn find(&self, text: &str) -> Option<FieldMatch> {
        find_digit_bounded(&DATE_PATTERN, text).map(FieldMatch::from)
    }
}

/// Extract the first date token from text.
pub fn extract_date(text: &str) -> Option<String> {
    DateMatcher::new().find(text).map(|m| m.value)
}
