//! Word document model and reading.

mod reader;

pub use reader::DocxReader;

use std::path::Path;

use crate::error::DocumentError;

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Text content of a document: body paragraphs and top-level tables, both in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Body paragraph texts. Paragraphs inside tables are not included.
    pub paragraphs: Vec<String>,
    /// Top-level tables.
    pub tables: Vec<Table>,
}

impl Document {
    pub fn new(paragraphs: Vec<String>, tables: Vec<Table>) -> Self {
        Self { paragraphs, tables }
    }

    /// Paragraphs joined one per line.
    pub fn paragraph_text(&self) -> String {
        self.paragraphs.join("\n")
    }
}

/// A table as rows of cell texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Cell texts of each row joined with a single space.
    pub fn row_texts(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|cells| cells.join(" "))
    }
}

/// Trait for document readers.
pub trait DocumentReader {
    /// Open and parse the document at `path`.
    fn read(&self, path: &Path) -> Result<Document>;
}
