//! # Whitebox Indexer Shared
//!
//! Shared data types for the whitebox contributor indexer: the contributor
//! catalog loaded from configuration, and the derived documents published
//! into the search index.

pub mod catalog;
pub mod documents;

pub use catalog::{Catalog, Contributor};
pub use documents::{AliasDocument, ProjectDocument};
