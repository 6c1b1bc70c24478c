//! # Whitebox Indexer Pipeline
//!
//! This crate provides the pipeline components for deriving search documents
//! from the contributor catalog and loading them into the search index.
//!
//! ## Architecture
//!
//! The pipeline follows the Catalog-Generator-Loader pattern:
//!
//! 1. **Catalog**: Loads the contributor catalog from its YAML file
//! 2. **Generators**: Lazily derive project and alias documents
//! 3. **Loader**: Replaces an index's content with a document stream

pub mod catalog;
pub mod errors;
pub mod generator;
pub mod loader;

pub use errors::PipelineError;
