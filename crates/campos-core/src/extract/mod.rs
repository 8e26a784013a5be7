//! Form field extraction from plain text.

pub mod rules;

use tracing::trace;

use crate::models::record::FieldSet;
use rules::{CpfMatcher, DateMatcher, FieldMatcher, NameMatcher};

/// Extract name, CPF and date from a block of text.
///
/// The three matchers run independently over the same text; a missing field
/// leaves its slot empty.
pub fn extract(text: &str) -> FieldSet {
    FieldSet {
        name: first_value(&NameMatcher, text),
        id_number: first_value(&CpfMatcher, text),
        date: first_value(&DateMatcher, text),
    }
}

fn first_value(matcher: &impl FieldMatcher, text: &str) -> String {
    match matcher.find(text) {
        Some(m) => {
            trace!("{} matched at {:?}", matcher.label(), m.position);
            m.value
        }
        None => String::new(),
    }
}
