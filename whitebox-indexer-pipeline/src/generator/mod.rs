//! Generator module for the whitebox indexer pipeline.
//!
//! Derives the two document streams from the loaded catalog. Both generators
//! are lazy, finite, and consumed exactly once; the loader streams them
//! straight into the search index so peak memory stays at one document.

mod alias;
mod identity;
mod project;
mod stamp;

pub use alias::AliasDocuments;
pub use identity::resolve_identifier;
pub use project::ProjectDocuments;
