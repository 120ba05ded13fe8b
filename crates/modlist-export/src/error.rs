//! Error types for manifest loading and report export
//!
//! Only manifest-level and export-level failures are errors. A descriptor that
//! cannot be resolved is recorded as a [`MissingReason`](crate::MissingReason)
//! on its entry and never aborts a run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user as blocking notices
#[derive(Error, Debug)]
pub enum ExportError {
    /// The manifest file could not be opened or read
    #[error("Failed to read manifest '{}'", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file is not a JSON object of the expected shape
    #[error("Failed to parse JSON in '{}'", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A mod directory was given but is not a directory on disk
    #[error("Mod directory '{}' does not exist", path.display())]
    ModDirectoryNotFound { path: PathBuf },

    /// The report could not be written to the chosen destination
    #[error("Could not save file '{}'", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Manifest errors end the run; everything else leaves it usable
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExportError::ManifestRead { .. } | ExportError::ManifestParse { .. }
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            ExportError::ManifestRead { .. } => "manifest_read",
            ExportError::ManifestParse { .. } => "manifest_parse",
            ExportError::ModDirectoryNotFound { .. } => "mod_directory",
            ExportError::ReportWrite { .. } => "report_write",
        }
    }
}
