//! Excel output using rust_xlsxwriter.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::Sheet;
use crate::error::ExportError;

/// Worksheet name, as written by the spreadsheet tools users already have.
pub const SHEET_NAME: &str = "Sheet1";

pub(super) fn write_xlsx(sheet: &Sheet, path: &Path, bold_header: bool) -> Result<(), ExportError> {
    build_and_save(sheet, path, bold_header).map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn build_and_save(sheet: &Sheet, path: &Path, bold_header: bool) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = if bold_header {
        Format::new().set_bold()
    } else {
        Format::new()
    };

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
    }

    for (idx, row) in sheet.rows.iter().enumerate() {
        let row_num = (idx + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            // Empty values stay blank cells.
            if !value.is_empty() {
                worksheet.write_string(row_num, col as u16, value)?;
            }
        }
    }

    workbook.save(path)
}
