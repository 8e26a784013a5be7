//! Single-document mode: one file in, one `Nome, CPF, Data` row out.
//!
//! Unlike batch mode, a read failure here is terminal and is returned to the
//! caller.

use std::path::Path;

use tracing::info;

use crate::docx::DocumentReader;
use crate::error::Result;
use crate::export::Exporter;
use crate::models::record::FieldSet;
use crate::scanner::scan_path;

/// Scan one document.
pub fn extract_document(reader: &impl DocumentReader, path: &Path) -> Result<FieldSet> {
    let fields = scan_path(reader, path)?;
    if !fields.is_populated() {
        info!("No fields found in {}", path.display());
    }
    Ok(fields)
}

/// Scan one document and write its row to `destination`.
pub fn extract_to_file(
    reader: &impl DocumentReader,
    exporter: &Exporter,
    path: &Path,
    destination: &Path,
) -> Result<FieldSet> {
    let fields = extract_document(reader, path)?;
    exporter.export_single(&fields, destination)?;
    Ok(fields)
}
