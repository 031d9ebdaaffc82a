//! Report writer trait and output errors

use crate::extractor::PageResult;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing report artifacts
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render PDF: {0}")]
    Pdf(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// One report artifact
///
/// Every writer overwrites its file completely, so writing the same results
/// twice leaves the same file behind.
pub trait ReportWriter {
    /// File name of the artifact inside the output directory
    fn file_name(&self) -> &'static str;

    /// Writes the artifact for `results` to `path`
    fn write(&self, results: &[PageResult], path: &Path) -> OutputResult<()>;
}
