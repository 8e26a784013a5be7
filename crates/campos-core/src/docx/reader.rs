//! DOCX reading using docx-rs.

use std::fs;
use std::path::Path;

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, TableCellContent, TableChild,
    TableRowChild,
};
use tracing::{debug, trace};

use super::{Document, DocumentReader, Result, Table};
use crate::error::DocumentError;

/// Reads `.docx` packages from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxReader;

impl DocxReader {
    pub fn new() -> Self {
        Self
    }

    /// Parse a document already loaded in memory. `path` is only used in
    /// error messages.
    pub fn parse(&self, path: &Path, bytes: &[u8]) -> Result<Document> {
        let docx = read_docx(bytes).map_err(|e| DocumentError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut document = Document::default();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(p) => document.paragraphs.push(paragraph_text(p)),
                DocumentChild::Table(t) => document.tables.push(convert_table(t)),
                // Section properties, bookmarks, content controls.
                _ => trace!("Skipping non-text body element"),
            }
        }

        debug!(
            "Read {}: {} paragraphs, {} tables",
            path.display(),
            document.paragraphs.len(),
            document.tables.len()
        );

        Ok(document)
    }
}

impl DocumentReader for DocxReader {
    fn read(&self, path: &Path) -> Result<Document> {
        let bytes = fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(path, &bytes)
    }
}

/// Cell text is the cell's own paragraphs joined with newlines. Nested tables
/// are left out. A cell spanning several grid columns is read once, so a
/// merged label cell does not repeat its label in the row text.
#[allow(irrefutable_let_patterns)]
fn convert_table(table: &docx_rs::Table) -> Table {
    let mut rows = Vec::with_capacity(table.rows.len());

    for row in &table.rows {
        let TableChild::TableRow(row) = row;

        let mut cells = Vec::with_capacity(row.cells.len());
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;

            let paragraphs: Vec<String> = cell
                .children
                .iter()
                .filter_map(|content| match content {
                    TableCellContent::Paragraph(p) => Some(paragraph_text(p)),
                    TableCellContent::Table(_) => {
                        debug!("Cell has a nested table, not extracting it");
                        None
                    }
                    _ => None,
                })
                .collect();

            cells.push(paragraphs.join("\n"));
        }
        rows.push(cells);
    }

    Table::new(rows)
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&paragraph.children, &mut text);
    text
}

/// Runs inside hyperlinks count as paragraph text.
fn push_children_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, text),
            _ => {}
        }
    }
}
