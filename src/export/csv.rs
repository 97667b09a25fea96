//! CSV encoding for the text export.

use crate::Error;

use super::core::ExportRow;

/// Encode `rows` as CSV with no header row.
pub fn write_csv(rows: &[ExportRow]) -> Result<Vec<u8>, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for row in rows {
        writer
            .write_record(row.columns())
            .map_err(|error| Error::CsvWriteError(error.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|error| Error::CsvWriteError(error.to_string()))
}
