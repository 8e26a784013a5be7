//! Two-tier document scanning: body paragraphs first, then table rows.

use std::path::Path;

use tracing::debug;

use crate::docx::{Document, DocumentReader};
use crate::error::DocumentError;
use crate::extract::extract;
use crate::models::record::FieldSet;

/// Where a scan found its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// The joined body paragraphs.
    Paragraphs,
    /// A table row (zero-based indices).
    TableRow { table: usize, row: usize },
    /// Nothing matched anywhere.
    None,
}

/// Fields found in a document together with where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub fields: FieldSet,
    pub source: MatchSource,
}

/// Scan a parsed document.
///
/// The first populated result wins: if the paragraphs yield any field the
/// tables are never looked at, and within the tables the first row yielding
/// any field ends the scan. Partial results from different rows are not
/// merged.
pub fn scan(document: &Document) -> FieldSet {
    scan_with_source(document).fields
}

/// Like [`scan`], also reporting which tier produced the fields.
pub fn scan_with_source(document: &Document) -> ScanOutcome {
    let fields = extract(&document.paragraph_text());
    if fields.is_populated() {
        debug!("Fields found in paragraphs");
        return ScanOutcome {
            fields,
            source: MatchSource::Paragraphs,
        };
    }

    for (table_idx, table) in document.tables.iter().enumerate() {
        for (row_idx, row_text) in table.row_texts().enumerate() {
            let fields = extract(&row_text);
            if fields.is_populated() {
                debug!("Fields found in table {} row {}", table_idx, row_idx);
                return ScanOutcome {
                    fields,
                    source: MatchSource::TableRow {
                        table: table_idx,
                        row: row_idx,
                    },
                };
            }
        }
    }

    debug!("No fields found in paragraphs or tables");
    ScanOutcome {
        fields: FieldSet::default(),
        source: MatchSource::None,
    }
}

/// Read the document at `path` and scan it. A read failure is returned as an
/// error, never as a partial field set.
pub fn scan_path(reader: &impl DocumentReader, path: &Path) -> Result<FieldSet, DocumentError> {
    let document = reader.read(path)?;
    Ok(scan(&document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::Table;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_paragraphs_first() {
        let document = Document::new(
            strings(&["Nome completo: Maria Silva", "CPF: 123.456.789-01", "Data: 01/02/2023"]),
            vec![],
        );

        let outcome = scan_with_source(&document);
        assert_eq!(outcome.source, MatchSource::Paragraphs);
        assert_eq!(
            outcome.fields,
            FieldSet::new("Maria Silva", "123.456.789-01", "01/02/2023")
        );
    }

    #[test]
    fn test_falls_back_to_first_table_row() {
        let document = Document::new(
            strings(&["Formulário", ""]),
            vec![Table::new(vec![
                strings(&["CPF", "123.456.789-01"]),
                strings(&["Nome", "Outro"]),
            ])],
        );

        let outcome = scan_with_source(&document);
        assert_eq!(outcome.source, MatchSource::TableRow { table: 0, row: 0 });
        assert_eq!(outcome.fields, FieldSet::new("", "123.456.789-01", ""));
    }

    #[test]
    fn test_paragraphs_short_circuit_tables() {
        let document = Document::new(
            strings(&["Nome: Ana Lima"]),
            vec![Table::new(vec![strings(&[
                "CPF 111.222.333-44",
                "Data 05/06/2021",
            ])])],
        );

        assert_eq!(scan(&document), FieldSet::new("Ana Lima", "", ""));
    }

    #[test]
    fn test_table_row_label_without_separator() {
        let document = Document::new(
            vec![String::new()],
            vec![Table::new(vec![strings(&["Nome", "João Souza"])])],
        );

        assert_eq!(scan(&document), FieldSet::new("João Souza", "", ""));
    }

    #[test]
    fn test_rows_are_not_merged() {
        let document = Document::new(
            vec![],
            vec![
                Table::new(vec![strings(&["sem dados"]), strings(&["Nome:", "Ana"])]),
                Table::new(vec![strings(&["CPF", "123.456.789-01"])]),
            ],
        );

        let outcome = scan_with_source(&document);
        assert_eq!(outcome.source, MatchSource::TableRow { table: 0, row: 1 });
        assert_eq!(outcome.fields, FieldSet::new("Ana", "", ""));
    }

    #[test]
    fn test_later_table_used_when_earlier_is_empty() {
        let document = Document::new(
            vec![],
            vec![
                Table::new(vec![strings(&["a", "b"])]),
                Table::new(vec![strings(&["Data", "10-11-2020"])]),
            ],
        );

        let outcome = scan_with_source(&document);
        assert_eq!(outcome.source, MatchSource::TableRow { table: 1, row: 0 });
        assert_eq!(outcome.fields.date, "10-11-2020");
    }

    #[test]
    fn test_nothing_found() {
        let document = Document::new(
            strings(&["texto livre"]),
            vec![Table::new(vec![strings(&["x", "y"])])],
        );

        let outcome = scan_with_source(&document);
        assert_eq!(outcome.source, MatchSource::None);
        assert_eq!(outcome.fields, FieldSet::default());
        assert_eq!(scan(&Document::default()), FieldSet::default());
    }
}
