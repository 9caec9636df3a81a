//! Export orchestration: guard, render, write.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use evreg_model::RegistrationListing;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::delimited::render_csv;
use crate::error::{ExportError, Result};
use crate::filename::export_file_name;
use crate::flatten::ExportOptions;
use crate::output::write_atomic;
use crate::summary::ExportSummary;
use crate::table::ExportTable;
use crate::workbook::render_workbook;

/// Title used when the event has none.
const FALLBACK_TITLE: &str = "Event";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// What an export run produced.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub row_count: usize,
    pub column_count: usize,
    pub table: ExportTable,
    pub summary: ExportSummary,
}

/// Export every registration of an event to `output_dir`.
///
/// Fails with [`ExportError::Empty`] before touching the filesystem when
/// there is nothing to export. The file is written atomically, so a
/// failed run leaves no partial output behind.
pub fn export_registrations(
    listing: &RegistrationListing,
    output_dir: &Path,
    format: ExportFormat,
    options: &ExportOptions,
    exported_at: DateTime<Utc>,
) -> Result<ExportReport> {
    let title = listing.event.title.as_str();
    let title = if title.is_empty() { FALLBACK_TITLE } else { title };
    if listing.registrations.is_empty() {
        warn!(event = %title, "no registrations to export");
        return Err(ExportError::Empty {
            event: title.to_string(),
        });
    }

    let table = ExportTable::build(&listing.registrations, options);
    let summary = ExportSummary::build(listing, exported_at, options);
    let path = output_dir.join(export_file_name(title, exported_at, format.extension()));

    let written = match format {
        ExportFormat::Xlsx => render_workbook(&table, &summary),
        ExportFormat::Csv => render_csv(&table),
    }
    .and_then(|bytes| write_atomic(&path, &bytes));
    if let Err(err) = &written {
        error!(event = %title, path = %path.display(), error = %err, "export generation failed");
    }
    written?;

    info!(
        event = %title,
        path = %path.display(),
        format = %format,
        rows = table.row_count(),
        columns = table.column_count(),
        "registrations exported"
    );
    Ok(ExportReport {
        path,
        format,
        row_count: table.row_count(),
        column_count: table.column_count(),
        table,
        summary,
    })
}
