//! Error types for roster export.

use std::path::PathBuf;

use thiserror::Error;

/// Generic text shown when a roster file could not be produced.
pub const EXPORT_FALLBACK_MESSAGE: &str = "Failed to export data. Please try again.";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// The event has no registrations; nothing was written.
    #[error("no registrations to export for {event}")]
    Empty { event: String },

    #[error("invalid {field} format: {format}")]
    InvalidFormat { field: &'static str, format: String },

    #[error("export generation failed: {message}")]
    Generation { message: String },

    #[error("write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ExportError {
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Message suitable for showing to the person running the export.
    pub fn user_message(&self) -> String {
        match self {
            Self::Empty { .. } => "No registrations to export for this event".to_string(),
            Self::InvalidFormat { .. } => self.to_string(),
            _ => EXPORT_FALLBACK_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
