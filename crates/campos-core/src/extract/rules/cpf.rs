//! CPF token extraction.
//!
//! Only the printed `000.000.000-00` form is recognised. Check digits are not
//! verified.

use super::patterns::CPF_PATTERN;
use super::{find_digit_bounded, FieldMatch, FieldMatcher};
use crate::models::record::COLUMN_ID_NUMBER;

/// CPF field matcher.
pub struct CpfMatcher;

impl CpfMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CpfMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMatcher for CpfMatcher {
    fn label(&self) -> &'static str {
        COLUMN_ID_NUMBER
    }

    fn find(&self, text: &str) -> Option<FieldMatch> {
        find_digit_bounded(&CPF_PATTERN, text).map(FieldMatch::from)
    }
}

/// Extract the first CPF token from text.
pub fn extract_cpf(text: &str) -> Option<String> {
    CpfMatcher::new().find(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_cpf() {
        assert_eq!(
            extract_cpf("CPF: 123.456.789-01"),
            Some("123.456.789-01".to_string())
        );
    }

    #[test]
    fn test_surrounding_non_digits() {
        for text in ["CPF:123.456.789-01.", "(123.456.789-01)", "xx123.456.789-01yy"] {
            assert_eq!(extract_cpf(text), Some("123.456.789-01".to_string()), "{text}");
        }
    }

    #[test]
    fn test_first_token_wins() {
        assert_eq!(
            extract_cpf("111.111.111-11 e 222.222.222-22"),
            Some("111.111.111-11".to_string())
        );
    }

    #[test]
    fn test_wrong_shapes() {
        assert_eq!(extract_cpf("12345678901"), None);
        assert_eq!(extract_cpf("123.456.789.01"), None);
        assert_eq!(extract_cpf("12.456.789-01"), None);
        assert_eq!(extract_cpf("0123.456.789-01"), None);
    }

    #[test]
    fn test_no_checksum_validation() {
        assert_eq!(
            extract_cpf("000.000.000-00"),
            Some("000.000.000-00".to_string())
        );
    }
}
