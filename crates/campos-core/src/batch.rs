//! Batch aggregation over many documents.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::docx::{DocumentReader, DocxReader};
use crate::models::record::{ExtractionTable, ResultRow};
use crate::scanner::scan_path;

/// Base name used as the row identifier.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Scan every path with the DOCX reader. See [`aggregate_with`].
pub fn aggregate<P: AsRef<Path>>(paths: &[P]) -> ExtractionTable {
    aggregate_with(&DocxReader::new(), paths)
}

/// Scan every path in order, producing exactly one row per path.
///
/// A document that cannot be read becomes a row with empty fields and the
/// error message; the remaining paths are still processed.
pub fn aggregate_with<R, P>(reader: &R, paths: &[P]) -> ExtractionTable
where
    R: DocumentReader,
    P: AsRef<Path>,
{
    aggregate_with_progress(reader, paths, |_| {})
}

/// Like [`aggregate_with`], calling `on_row` after each document.
pub fn aggregate_with_progress<R, P, F>(reader: &R, paths: &[P], mut on_row: F) -> ExtractionTable
where
    R: DocumentReader,
    P: AsRef<Path>,
    F: FnMut(&ResultRow),
{
    let start = Instant::now();
    let mut table = ExtractionTable::new();

    for path in paths {
        let path = path.as_ref();
        let file_name = file_name_of(path);

        let row = match scan_path(reader, path) {
            Ok(fields) => {
                debug!("Scanned {}: {:?}", path.display(), fields);
                ResultRow::extracted(file_name, fields)
            }
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                ResultRow::failed(file_name, e.to_string())
            }
        };
        on_row(&row);
        table.push(row);
    }

    info!(
        "Processed {} documents in {:?} ({})",
        table.len(),
        start.elapsed(),
        table.summary()
    );

    table
}
