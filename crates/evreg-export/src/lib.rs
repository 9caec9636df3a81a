//! Registration roster export.
//!
//! Stored registrations are flattened into labeled rows, laid out under a
//! union header and written as a two-sheet workbook ("Event Registrations"
//! and "Summary") or as CSV. Statistics for the event are reduced from the
//! same records.

pub mod delimited;
pub mod error;
pub mod export;
pub mod filename;
pub mod flatten;
pub mod output;
pub mod stats;
pub mod summary;
pub mod table;
pub mod workbook;

pub use delimited::render_csv;
pub use error::{EXPORT_FALLBACK_MESSAGE, ExportError, Result};
pub use export::{ExportFormat, ExportReport, export_registrations};
pub use filename::{export_file_name, sanitize_title};
pub use flatten::{
    CORE_COLUMNS, CellValue, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT, ExportOptions, ExportRow,
    MEMBER_COLUMNS_PER_MEMBER, OPTIONAL_COLUMNS, flatten,
};
pub use output::write_atomic;
pub use stats::{DEFAULT_RECENT_WINDOW_DAYS, DEFAULT_TOP_INSTITUTIONS, StatsOptions, compute_stats};
pub use summary::{ExportSummary, rank_institutions};
pub use table::{ExportTable, MIN_COLUMN_WIDTH};
pub use workbook::{REGISTRATIONS_SHEET, SUMMARY_COLUMN_WIDTHS, SUMMARY_SHEET, render_workbook};
