//! # Whitebox Indexer Repository
//!
//! This crate provides the trait and implementation for interacting with the
//! search engine. It includes definitions for errors, interfaces, and a
//! concrete implementation for OpenSearch.

pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use opensearch::OpenSearchClient;
