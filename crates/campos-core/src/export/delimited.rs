//! CSV output using the csv crate.

use std::path::Path;

use super::Sheet;
use crate::error::ExportError;

pub(super) fn write_csv(sheet: &Sheet, path: &Path) -> Result<(), ExportError> {
    let write_error = |e: &dyn std::fmt::Display| ExportError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut wtr = csv::Writer::from_path(path).map_err(|e| write_error(&e))?;

    wtr.write_record(&sheet.headers).map_err(|e| write_error(&e))?;
    for row in &sheet.rows {
        wtr.write_record(row).map_err(|e| write_error(&e))?;
    }

    wtr.flush().map_err(|e| write_error(&e))?;
    Ok(())
}
