//! Spreadsheet export of extraction results.

mod delimited;
mod xlsx;

pub use xlsx::SHEET_NAME;

use std::path::Path;

use tracing::info;

use crate::error::ExportError;
use crate::models::record::{
    ExtractionTable, FieldSet, COLUMN_DATE, COLUMN_ERROR, COLUMN_FILE, COLUMN_ID_NUMBER,
    COLUMN_NAME,
};

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Output file format, chosen from the destination extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Excel workbook.
    Xlsx,
    /// Comma-separated values.
    Csv,
}

impl ExportFormat {
    /// Format for `path`. A path without extension is written as xlsx.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            None | Some("xlsx") => Ok(Self::Xlsx),
            Some("csv") => Ok(Self::Csv),
            Some(other) => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A header row and data rows ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Batch layout: `Arquivo, Nome, CPF, Data`, plus `Erro` when any row
    /// failed. Rows keep table order.
    pub fn from_table(table: &ExtractionTable) -> Self {
        let with_errors = table.has_errors();

        let rows = table
            .iter()
            .map(|row| {
                let mut cells = Vec::with_capacity(5);
                cells.push(row.file_name.clone());
                cells.extend(row.fields().values().iter().map(|v| v.to_string()));
                if with_errors {
                    cells.push(row.error().unwrap_or_default().to_string());
                }
                cells
            })
            .collect();

        Self {
            headers: batch_columns(with_errors),
            rows,
        }
    }

    /// Single-document layout: `Nome, CPF, Data`, one data row.
    pub fn from_fields(fields: &FieldSet) -> Self {
        Self {
            headers: single_columns(),
            rows: vec![fields.values().iter().map(|v| v.to_string()).collect()],
        }
    }
}

fn batch_columns(with_errors: bool) -> Vec<String> {
    let mut columns = vec![COLUMN_FILE.to_string()];
    columns.extend(single_columns());
    if with_errors {
        columns.push(COLUMN_ERROR.to_string());
    }
    columns
}

fn single_columns() -> Vec<String> {
    [COLUMN_NAME, COLUMN_ID_NUMBER, COLUMN_DATE]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Writes sheets to disk.
#[derive(Debug, Clone)]
pub struct Exporter {
    bold_header: bool,
}

impl Exporter {
    pub fn new() -> Self {
        Self { bold_header: true }
    }

    /// Set whether the xlsx header row is bold.
    pub fn with_bold_header(mut self, bold: bool) -> Self {
        self.bold_header = bold;
        self
    }

    /// Write a batch table to `destination`.
    pub fn export_table(&self, table: &ExtractionTable, destination: &Path) -> Result<()> {
        self.write(&Sheet::from_table(table), destination)
    }

    /// Write a single-document result to `destination`.
    pub fn export_single(&self, fields: &FieldSet, destination: &Path) -> Result<()> {
        self.write(&Sheet::from_fields(fields), destination)
    }

    /// Write any sheet, picking the format from the extension. The file is
    /// closed before returning, on success and on failure.
    pub fn write(&self, sheet: &Sheet, destination: &Path) -> Result<()> {
        match ExportFormat::from_path(destination)? {
            ExportFormat::Xlsx => xlsx::write_xlsx(sheet, destination, self.bold_header)?,
            ExportFormat::Csv => delimited::write_csv(sheet, destination)?,
        }

        info!(
            "Wrote {} rows to {}",
            sheet.rows.len(),
            destination.display()
        );
        Ok(())
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a batch table with default settings.
pub fn export_table(table: &ExtractionTable, destination: &Path) -> Result<()> {
    Exporter::new().export_table(table, destination)
}

/// Write a single-document result with default settings.
pub fn export_single(fields: &FieldSet, destination: &Path) -> Result<()> {
    Exporter::new().export_single(fields, destination)
}
