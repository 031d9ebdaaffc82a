//! Structured artifact: the full result set as pretty-printed JSON

use crate::extractor::PageResult;
use crate::output::traits::{OutputResult, ReportWriter};
use std::path::Path;

pub struct JsonReport;

impl ReportWriter for JsonReport {
    fn file_name(&self) -> &'static str {
        "content.json"
    }

    fn write(&self, results: &[PageResult], path: &Path) -> OutputResult<()> {
        std::fs::write(path, format_json_report(results)?)?;
        Ok(())
    }
}

/// Serializes the results as a JSON array indented by two spaces
pub fn format_json_report(results: &[PageResult]) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
