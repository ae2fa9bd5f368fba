//! XLSX export via rust_xlsxwriter.

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::error::ExportError;
use crate::models::table::CleanedTable;

/// Write a cleaned table to an xlsx file: header row first, then the body
/// rows, every cell as text.
pub fn write_xlsx(table: &CleanedTable, path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in table.columns.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name)
            .map_err(|e| ExportError::Write(e.to_string()))?;
    }

    for (row, cells) in table.rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            worksheet
                .write_string((row + 1) as u32, col as u16, cell)
                .map_err(|e| ExportError::Write(e.to_string()))?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| ExportError::Write(e.to_string()))?;

    debug!(
        "Wrote {} columns x {} rows to {}",
        table.columns.len(),
        table.rows.len(),
        path.display()
    );
    Ok(())
}
