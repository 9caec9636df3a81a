//! Spreadsheet rendering with `rust_xlsxwriter`.

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::{ExportError, Result};
use crate::flatten::CellValue;
use crate::summary::ExportSummary;
use crate::table::ExportTable;

pub const REGISTRATIONS_SHEET: &str = "Event Registrations";
pub const SUMMARY_SHEET: &str = "Summary";

/// Widths of the summary sheet's metric and value columns.
pub const SUMMARY_COLUMN_WIDTHS: [f64; 2] = [30.0, 20.0];

/// Render the roster workbook into memory.
pub fn render_workbook(table: &ExportTable, summary: &ExportSummary) -> Result<Vec<u8>> {
    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();
    workbook.push_worksheet(registrations_sheet(table, &header)?);
    workbook.push_worksheet(summary_sheet(summary, &header)?);
    Ok(workbook.save_to_buffer()?)
}

fn registrations_sheet(table: &ExportTable, header: &Format) -> Result<Worksheet> {
    let mut sheet = Worksheet::new();
    sheet.set_name(REGISTRATIONS_SHEET)?;

    for (index, (title, width)) in table
        .headers()
        .iter()
        .zip(table.column_widths())
        .enumerate()
    {
        let col = to_col(index)?;
        sheet.write_string_with_format(0, col, title, header)?;
        sheet.set_column_width(col, width as f64)?;
    }

    for (index, cells) in table.rows().iter().enumerate() {
        let row = to_row(index + 1)?;
        for (col_index, cell) in cells.iter().enumerate() {
            if let Some(cell) = cell {
                write_cell(&mut sheet, row, to_col(col_index)?, cell)?;
            }
        }
    }
    Ok(sheet)
}

fn summary_sheet(summary: &ExportSummary, header: &Format) -> Result<Worksheet> {
    let mut sheet = Worksheet::new();
    sheet.set_name(SUMMARY_SHEET)?;
    sheet.write_string_with_format(0, 0, "Metric", header)?;
    sheet.write_string_with_format(0, 1, "Value", header)?;
    for (col, width) in SUMMARY_COLUMN_WIDTHS.into_iter().enumerate() {
        sheet.set_column_width(to_col(col)?, width)?;
    }

    for (index, entry) in summary.sheet_rows().iter().enumerate() {
        let Some((metric, value)) = entry else {
            continue;
        };
        let row = to_row(index + 1)?;
        sheet.write_string(row, 0, metric)?;
        write_cell(&mut sheet, row, 1, value)?;
    }
    Ok(sheet)
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &CellValue) -> Result<()> {
    match cell {
        CellValue::Text(text) if text.is_empty() => {}
        CellValue::Text(text) => {
            sheet.write_string(row, col, text)?;
        }
        CellValue::Number(number) => {
            sheet.write_number(row, col, *number as f64)?;
        }
    }
    Ok(())
}

fn to_row(index: usize) -> Result<u32> {
    u32::try_from(index).map_err(|_| ExportError::generation(format!("row {index} out of range")))
}

fn to_col(index: usize) -> Result<u16> {
    u16::try_from(index)
        .map_err(|_| ExportError::generation(format!("column {index} out of range")))
}
