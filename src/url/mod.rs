//! URL handling module for Page-Harvest
//!
//! Crawl scope is a plain string prefix over the serialized absolute URL.
//! No normalization beyond what [`url::Url`] applies on parse/join is done,
//! so two URLs are the same page exactly when their serializations match.

mod scope;

pub use scope::Scope;
