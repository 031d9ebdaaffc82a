use crate::storage::traits::UrlSink;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use url::Url;

/// Prefix of every record line in a URL list file
const RECORD_PREFIX: &str = "URL";

/// Writes visited URLs as `URL : <url>` lines
pub struct UrlListWriter<W: Write> {
    writer: W,
    written: usize,
}

impl UrlListWriter<BufWriter<File>> {
    /// Creates (or truncates) the list file at `path`
    pub fn create(path: &Path) -> std::io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> UrlListWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> UrlSink for UrlListWriter<W> {
    fn record(&mut self, url: &Url) -> std::io::Result<()> {
        writeln!(self.writer, "{} : {}", RECORD_PREFIX, url)?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }
}

/// Reads the URL list file at `path`
pub fn read_url_list(path: &Path) -> std::io::Result<Vec<String>> {
    parse_url_list(BufReader::new(File::open(path)?))
}

/// Parses URL list lines from any reader
///
/// Only lines starting with `URL` count. From those, the leading run of the
/// characters `U`, `R`, `L`, space and `:` is stripped, then surrounding
/// whitespace. Every other line is ignored.
pub fn parse_url_list<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut urls = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if !line.starts_with(RECORD_PREFIX) {
            continue;
        }

        let url = line
            .trim_start_matches(|c| matches!(c, 'U' | 'R' | 'L' | ' ' | ':'))
            .trim();
        urls.push(url.to_string());
    }

    Ok(urls)
}
