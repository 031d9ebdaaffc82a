//! Output module: the Reporter
//!
//! Writes one extraction result set as three artifacts in an output
//! directory:
//! - `content.json`: the complete result set
//! - `content.txt`: successful pages as flat text
//! - `content.pdf`: one styled page (or more) per result

mod json;
mod pdf;
pub mod stats;
mod text;
mod traits;

pub use json::{format_json_report, JsonReport};
pub use pdf::{layout_document, render_pdf, LaidOutPage, PdfReport, PlacedLine, TextStyle};
pub use stats::{print_statistics, ReportStatistics};
pub use text::{format_text_report, TextReport};
pub use traits::{OutputError, OutputResult, ReportWriter};

use crate::extractor::PageResult;
use std::path::{Path, PathBuf};

/// Writes all three report artifacts into `output_dir`
///
/// The directory is created if missing. Existing artifacts are overwritten,
/// so the same results always produce the same JSON and text files.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of the written artifacts
/// * `Err(OutputError)` - A directory or file could not be written
pub fn write_report(results: &[PageResult], output_dir: &Path) -> OutputResult<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;

    let writers: [&dyn ReportWriter; 3] = [&JsonReport, &TextReport, &PdfReport];
    let mut written = Vec::with_capacity(writers.len());

    for writer in writers {
        let path = output_dir.join(writer.file_name());
        writer.write(results, &path)?;
        tracing::debug!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
