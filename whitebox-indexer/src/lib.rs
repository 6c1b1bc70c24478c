//! # Whitebox Indexer
//!
//! Main library for the whitebox contributor indexer.
//!
//! This crate provides the command implementations and dependency wiring for
//! the CLI binary.

pub mod commands;
pub mod config;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] whitebox_indexer_pipeline::PipelineError),

    /// Search index error.
    #[error("Search index error: {0}")]
    SearchError(#[from] whitebox_indexer_repository::SearchIndexError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
