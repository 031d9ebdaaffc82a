//! Summary counts over an extraction result set

use crate::extractor::{PageOutcome, PageResult};

/// Counts describing one extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStatistics {
    /// Number of URLs extracted
    pub total: usize,

    /// Results with status `success`
    pub succeeded: usize,

    /// Results with status `error`
    pub failed: usize,

    /// Content items across all successful results
    pub content_items: usize,
}

impl ReportStatistics {
    pub fn from_results(results: &[PageResult]) -> Self {
        results.iter().fold(Self::default(), |mut stats, result| {
            stats.total += 1;
            match &result.outcome {
                PageOutcome::Success { content, .. } => {
                    stats.succeeded += 1;
                    stats.content_items += content.len();
                }
                PageOutcome::Error { .. } => stats.failed += 1,
            }
            stats
        })
    }
}

/// Prints statistics to stdout in a human-readable format
pub fn print_statistics(stats: &ReportStatistics) {
    println!("=== Extraction Summary ===\n");
    println!("Pages:         {}", stats.total);
    println!("Succeeded:     {}", stats.succeeded);
    println!("Failed:        {}", stats.failed);
    println!("Content items: {}", stats.content_items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{ContentItem, ContentKind};

    #[test]
    fn test_from_results() {
        let results = vec![
            PageResult::success(
                "https://a/",
                "A",
                vec![
                    ContentItem::new(ContentKind::Heading, "x"),
                    ContentItem::new(ContentKind::Paragraph, "y"),
                ],
            ),
            PageResult::error("https://b/", "boom"),
            PageResult::success("https://c/", "C", vec![]),
        ];

        let stats = ReportStatistics::from_results(&results);
        assert_eq!(
            stats,
            ReportStatistics {
                total: 3,
                succeeded: 2,
                failed: 1,
                content_items: 2,
            }
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(ReportStatistics::from_results(&[]), ReportStatistics::default());
    }
}
