//! Assemble flattened rows into a rectangular table.

use std::collections::HashMap;

use evreg_model::RegistrationRecord;

use crate::flatten::{CellValue, ExportOptions, ExportRow, flatten};

/// Narrowest column width, in characters.
pub const MIN_COLUMN_WIDTH: usize = 15;

/// Registrations laid out under a shared header.
///
/// The header is the union of every row's labels in order of first
/// appearance. Rows that lack a column hold `None` there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<CellValue>>>,
}

impl ExportTable {
    /// Flatten `records` in order and lay them out.
    pub fn build(records: &[RegistrationRecord], options: &ExportOptions) -> Self {
        let rows: Vec<ExportRow> = records
            .iter()
            .enumerate()
            .map(|(index, record)| flatten(record, index, options))
            .collect();
        Self::from_rows(&rows)
    }

    pub fn from_rows(rows: &[ExportRow]) -> Self {
        let mut headers: Vec<String> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for row in rows {
            for label in row.labels() {
                if !positions.contains_key(label) {
                    positions.insert(label, headers.len());
                    headers.push(label.to_string());
                }
            }
        }

        let rows = rows
            .iter()
            .map(|row| {
                let mut cells = vec![None; headers.len()];
                for (label, value) in row.cells() {
                    if let Some(&position) = positions.get(label.as_str()) {
                        cells[position] = Some(value.clone());
                    }
                }
                cells
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<CellValue>>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Cell text for a row, blank where the row has no value.
    pub fn row_text(&self, index: usize) -> Option<Vec<String>> {
        self.rows.get(index).map(|cells| {
            cells
                .iter()
                .map(|cell| cell.as_ref().map(ToString::to_string).unwrap_or_default())
                .collect()
        })
    }

    /// Width per column: the header length, never below [`MIN_COLUMN_WIDTH`].
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .map(|header| header.chars().count().max(MIN_COLUMN_WIDTH))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> ExportRow {
        let mut row = ExportRow::default();
        for (label, value) in cells {
            row.push(*label, *value);
        }
        row
    }

    #[test]
    fn header_is_union_in_first_seen_order() {
        let table = ExportTable::from_rows(&[
            row(&[("A", "1"), ("B", "2")]),
            row(&[("A", "3"), ("C", "4")]),
            row(&[("B", "5")]),
        ]);
        assert_eq!(table.headers(), ["A", "B", "C"]);
        assert_eq!(table.row_text(0), Some(vec!["1".into(), "2".into(), String::new()]));
        assert_eq!(table.row_text(1), Some(vec!["3".into(), String::new(), "4".into()]));
        assert_eq!(table.row_text(2), Some(vec![String::new(), "5".into(), String::new()]));
    }

    #[test]
    fn widths_have_a_floor() {
        let table = ExportTable::from_rows(&[row(&[
            ("S.No", "1"),
            ("Additional Space Requirements", "Corner"),
        ])]);
        assert_eq!(table.column_widths(), vec![15, 29]);
    }
}
