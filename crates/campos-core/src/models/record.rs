//! Extraction records: the three-field set, per-document rows and the table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Column label for the source file name.
pub const COLUMN_FILE: &str = "Arquivo";
/// Column label for the person name.
pub const COLUMN_NAME: &str = "Nome";
/// Column label for the CPF number.
pub const COLUMN_ID_NUMBER: &str = "CPF";
/// Column label for the date.
pub const COLUMN_DATE: &str = "Data";
/// Column label for the per-document error message.
pub const COLUMN_ERROR: &str = "Erro";

/// The three fields extracted from a form.
///
/// Every slot is either empty or a value matched verbatim from the source
/// text. Only `name` is trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    /// Person name (`Nome`).
    #[serde(rename = "Nome")]
    pub name: String,

    /// CPF token in `ddd.ddd.ddd-dd` form.
    #[serde(rename = "CPF")]
    pub id_number: String,

    /// Date token in `dd/dd/dddd` form (either separator).
    #[serde(rename = "Data")]
    pub date: String,
}

impl FieldSet {
    /// Build a field set from its three slots.
    pub fn new(
        name: impl Into<String>,
        id_number: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id_number: id_number.into(),
            date: date.into(),
        }
    }

    /// True when at least one slot is non-empty.
    pub fn is_populated(&self) -> bool {
        !self.name.is_empty() || !self.id_number.is_empty() || !self.date.is_empty()
    }

    /// Slots in export column order.
    pub fn values(&self) -> [&str; 3] {
        [&self.name, &self.id_number, &self.date]
    }
}

/// One row of a batch: the fields found in a document, or the reason the
/// document could not be read.
///
/// Serialize only. Rows are built through [`ResultRow::extracted`] and
/// [`ResultRow::failed`] so a row never carries both data and an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    /// Base name of the source document.
    #[serde(rename = "Arquivo")]
    pub file_name: String,

    #[serde(flatten)]
    fields: FieldSet,

    #[serde(rename = "Erro", skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ResultRow {
    /// Row for a document that was read successfully.
    pub fn extracted(file_name: impl Into<String>, fields: FieldSet) -> Self {
        Self {
            file_name: file_name.into(),
            fields,
            error: None,
        }
    }

    /// Row for a document that failed. The field set is always empty so a
    /// failure never reports partial data.
    pub fn failed(file_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            fields: FieldSet::default(),
            error: Some(error.into()),
        }
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when the row carries a non-empty error message.
    pub fn has_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }
}

/// Ordered rows produced by one processing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractionTable {
    rows: Vec<ResultRow>,
}

impl ExtractionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when at least one row carries an error; decides whether the
    /// `Erro` column is exported.
    pub fn has_errors(&self) -> bool {
        self.rows.iter().any(ResultRow::has_error)
    }

    /// Drop every row whose file name is in `names`. Returns how many rows
    /// were removed.
    pub fn remove_file_names(&mut self, names: &HashSet<String>) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !names.contains(&row.file_name));
        before - self.rows.len()
    }

    /// Count extracted and failed rows.
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            total: self.rows.len(),
            extracted: self.rows.iter().filter(|r| r.fields.is_populated()).count(),
            failed: self.rows.iter().filter(|r| r.has_error()).count(),
        }
    }
}

impl FromIterator<ResultRow> for ExtractionTable {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ExtractionTable {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Status counts derived from a table. Reporting only, never exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Rows processed.
    pub total: usize,
    /// Rows with at least one non-empty field.
    pub extracted: usize,
    /// Rows with an error message.
    pub failed: usize,
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} with data extracted, {} with errors, total {}",
            self.extracted, self.failed, self.total
        )
    }
}
