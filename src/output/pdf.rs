//! Paginated document artifact
//!
//! Rendering is split in two: [`layout_document`] turns results into
//! positioned, styled lines grouped into pages, and [`render_pdf`] draws those
//! pages with printpdf. Only the second step depends on the PDF library.
//!
//! Text is drawn with the built-in Helvetica fonts, which only cover
//! Latin-1. Typographic quotes and dashes are mapped to ASCII and every other
//! character outside Latin-1 is drawn as `?`, so pages in non-Latin scripts
//! are unreadable in the PDF. `content.json` and `content.txt` keep the
//! original text.

use crate::extractor::{ContentKind, PageOutcome, PageResult};
use crate::output::traits::{OutputError, OutputResult, ReportWriter};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, Rgb,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// A4 portrait
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const TEXT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

const PT_TO_MM: f32 = 0.3528;

/// Dashes in the line closing every result
pub const PDF_SEPARATOR_WIDTH: usize = 65;

const EMPTY_REPORT_TEXT: &str = "No pages were extracted.";

/// Paragraph styles used in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Link,
    Heading,
    Normal,
}

impl TextStyle {
    pub fn font_size(self) -> f32 {
        match self {
            Self::Title => 18.0,
            Self::Heading => 14.0,
            Self::Normal => 11.0,
            Self::Link => 10.0,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, Self::Title | Self::Heading)
    }

    fn color(self) -> Color {
        match self {
            Self::Link => Color::Rgb(Rgb::new(0.0, 0.0, 0.8, None)),
            _ => Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)),
        }
    }

    fn line_height_mm(self) -> f32 {
        self.font_size() * 1.35 * PT_TO_MM
    }

    fn space_after_mm(self) -> f32 {
        match self {
            Self::Title => 3.0,
            Self::Link => 4.0,
            Self::Heading => 2.0,
            Self::Normal => 1.5,
        }
    }

    /// Approximate characters per line for Helvetica at this size
    fn max_chars(self) -> usize {
        let average_em = if self.is_bold() { 0.55 } else { 0.5 };
        let width_pt = TEXT_WIDTH_MM / PT_TO_MM;
        ((width_pt / (self.font_size() * average_em)) as usize).max(1)
    }
}

impl From<ContentKind> for TextStyle {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Heading => Self::Heading,
            ContentKind::Paragraph => Self::Normal,
        }
    }
}

/// One line of text at a fixed position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub style: TextStyle,
    pub text: String,
    /// Baseline distance from the bottom of the page
    pub y_mm: f32,
}

/// One physical page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub lines: Vec<PlacedLine>,
}

impl LaidOutPage {
    pub fn text(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }
}

struct PageBuilder {
    pages: Vec<LaidOutPage>,
    current: LaidOutPage,
    cursor_mm: f32,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: LaidOutPage::default(),
            cursor_mm: PAGE_HEIGHT_MM - MARGIN_MM,
        }
    }

    /// Adds a paragraph, wrapping and continuing on a new page when full
    fn paragraph(&mut self, style: TextStyle, text: &str) {
        for line in wrap_text(text, style.max_chars()) {
            let height = style.line_height_mm();
            if self.cursor_mm - height < MARGIN_MM && !self.current.lines.is_empty() {
                self.break_page();
            }
            self.cursor_mm -= height;
            self.current.lines.push(PlacedLine {
                style,
                text: line,
                y_mm: self.cursor_mm,
            });
        }
        self.cursor_mm -= style.space_after_mm();
    }

    fn break_page(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.pages.push(finished);
        self.cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    fn finish(self) -> Vec<LaidOutPage> {
        self.pages
    }
}

/// Lays out one block per result with a hard page break after each
///
/// Successful results get the page title, a `Source:` line in link style and
/// their content items; error results get an `Error scraping:` heading and the
/// error message. Both end with a 65-dash separator. A result that does not
/// fit on one page continues on the next. An empty result set produces a
/// single page saying so.
pub fn layout_document(results: &[PageResult]) -> Vec<LaidOutPage> {
    let separator = "-".repeat(PDF_SEPARATOR_WIDTH);
    let mut builder = PageBuilder::new();

    if results.is_empty() {
        builder.paragraph(TextStyle::Normal, EMPTY_REPORT_TEXT);
        builder.break_page();
        return builder.finish();
    }

    for result in results {
        match &result.outcome {
            PageOutcome::Success { title, content } => {
                builder.paragraph(TextStyle::Title, title);
                builder.paragraph(TextStyle::Link, &format!("Source: {}", result.url));
                for item in content {
                    builder.paragraph(item.kind.into(), &item.text);
                }
            }
            PageOutcome::Error { error } => {
                builder.paragraph(
                    TextStyle::Heading,
                    &format!("Error scraping: {}", result.url),
                );
                builder.paragraph(TextStyle::Normal, &format!("Error message: {}", error));
            }
        }
        builder.paragraph(TextStyle::Normal, &separator);
        builder.break_page();
    }

    builder.finish()
}

/// Greedy word wrap; words longer than a line are split
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                if chunk.len() == max_chars {
                    lines.push(chunk.iter().collect());
                } else {
                    current = chunk.iter().collect();
                    current_len = chunk.len();
                }
            }
            continue;
        }

        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        }
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Replaces characters the built-in PDF fonts cannot encode with `?`
fn pdf_safe(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{A0}'..='\u{FF}' => c,
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            _ => '?',
        })
        .collect()
}

fn pdf_error<E: std::fmt::Debug>(error: E) -> OutputError {
    OutputError::Pdf(format!("{:?}", error))
}

/// Draws laid-out pages into a new PDF document
pub fn render_pdf(pages: &[LaidOutPage], title: &str) -> OutputResult<PdfDocumentReference> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let mut first = Some((first_page, first_layer));

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = match first.take() {
            Some(indices) => indices,
            None => doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                format!("Layer {}", index + 1),
            ),
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in &page.lines {
            let font: &IndirectFontRef = if line.style.is_bold() { &bold } else { &regular };
            layer.set_fill_color(line.style.color());
            layer.use_text(
                pdf_safe(&line.text),
                line.style.font_size(),
                Mm(MARGIN_MM),
                Mm(line.y_mm),
                font,
            );
        }
    }

    Ok(doc)
}

pub struct PdfReport;

impl ReportWriter for PdfReport {
    fn file_name(&self) -> &'static str {
        "content.pdf"
    }

    fn write(&self, results: &[PageResult], path: &Path) -> OutputResult<()> {
        let pages = layout_document(results);
        tracing::debug!("Rendering {} PDF pages for {} results", pages.len(), results.len());

        let doc = render_pdf(&pages, "Extracted content")?;
        let mut writer = BufWriter::new(File::create(path)?);
        doc.save(&mut writer).map_err(pdf_error)?;
        Ok(())
    }
}
