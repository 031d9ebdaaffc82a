//! Flat-text artifact: successful pages only, item types dropped

use crate::extractor::{PageOutcome, PageResult};
use crate::output::traits::{OutputResult, ReportWriter};
use std::path::Path;

/// Line closing every page block
pub const TEXT_SEPARATOR_WIDTH: usize = 80;

pub struct TextReport;

impl ReportWriter for TextReport {
    fn file_name(&self) -> &'static str {
        "content.txt"
    }

    fn write(&self, results: &[PageResult], path: &Path) -> OutputResult<()> {
        std::fs::write(path, format_text_report(results))?;
        Ok(())
    }
}

/// Formats the flat-text report
///
/// Each successful page becomes a blank line, `URL: ...`, `Title: ...`, one
/// line per content item, then a line of 80 dashes. Error results are left out.
pub fn format_text_report(results: &[PageResult]) -> String {
    let separator = "-".repeat(TEXT_SEPARATOR_WIDTH);
    let mut text = String::new();

    for result in results {
        let PageOutcome::Success { title, content } = &result.outcome else {
            continue;
        };

        text.push('\n');
        text.push_str(&format!("URL: {}\n", result.url));
        text.push_str(&format!("Title: {}\n", title));
        for item in content {
            text.push_str(&item.text);
            text.push('\n');
        }
        text.push_str(&separator);
        text.push('\n');
    }

    text
}
