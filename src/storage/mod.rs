//! Storage module for the crawl → extract handoff
//!
//! The URL list file is the only artifact a crawl persists and the only
//! input extraction reads. Crawl state itself is never persisted.

mod traits;
mod url_list;

pub use traits::UrlSink;
pub use url_list::{parse_url_list, read_url_list, UrlListWriter};
