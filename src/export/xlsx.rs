//! XLSX encoding for the spreadsheet export.

use rust_xlsxwriter::Workbook;

use crate::Error;

use super::core::ExportRow;

/// Encode `rows` as an XLSX workbook with one worksheet, one row per
/// record and no header row.
pub fn write_xlsx(rows: &[ExportRow]) -> Result<Vec<u8>, Error> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_index, row) in rows.iter().enumerate() {
        for (column_index, value) in row.columns().into_iter().enumerate() {
            worksheet
                .write_string(row_index as u32, column_index as u16, value)
                .map_err(|error| Error::XlsxWriteError(error.to_string()))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|error| Error::XlsxWriteError(error.to_string()))
}
