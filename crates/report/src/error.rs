//! Report error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The PDF document could not be assembled.
    #[error("failed to build PDF: {0}")]
    Pdf(String),

    /// The report file or its directory could not be written.
    #[error("failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<printpdf::Error> for ReportError {
    fn from(err: printpdf::Error) -> Self {
        Self::Pdf(err.to_string())
    }
}
