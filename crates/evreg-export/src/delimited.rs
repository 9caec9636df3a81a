//! CSV rendering of the registrations table.

use crate::error::{ExportError, Result};
use crate::table::ExportTable;

/// Render the table as CSV: one header row, then one line per registration.
pub fn render_csv(table: &ExportTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.headers())?;
    for cells in table.rows() {
        writer.write_record(
            cells
                .iter()
                .map(|cell| cell.as_ref().map(ToString::to_string).unwrap_or_default()),
        )?;
    }
    writer
        .into_inner()
        .map_err(|err| ExportError::generation(err.to_string()))
}
