//! Rule-based matchers, one per form field.

pub mod cpf;
pub mod date;
pub mod name;
pub mod patterns;

pub use cpf::{extract_cpf, CpfMatcher};
pub use date::{extract_date, DateMatcher};
pub use name::{extract_name, NameMatcher};

use regex::{Match, Regex};

/// Trait for single-field matchers.
pub trait FieldMatcher {
    /// Column label of the field this matcher fills.
    fn label(&self) -> &'static str;

    /// First match of the field in `text`, if any.
    fn find(&self, text: &str) -> Option<FieldMatch>;
}

/// A value matched in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    /// Matched value, verbatim from the source.
    pub value: String,
    /// Byte range of `value` in the source text.
    pub position: (usize, usize),
}

impl FieldMatch {
    pub fn new(value: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            value: value.into(),
            position: (start, end),
        }
    }
}

impl From<Match<'_>> for FieldMatch {
    fn from(m: Match<'_>) -> Self {
        Self::new(m.as_str(), m.start(), m.end())
    }
}

/// First match of `pattern` that is not glued to another digit on either
/// side. Patterns passed here must start with an ASCII digit.
pub(crate) fn find_digit_bounded<'t>(pattern: &Regex, text: &'t str) -> Option<Match<'t>> {
    let mut start = 0;
    while start < text.len() {
        let m = pattern.find_at(text, start)?;

        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        let glued = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());

        if !glued(before) && !glued(after) {
            return Some(m);
        }

        start = m.start() + 1;
    }
    None
}
