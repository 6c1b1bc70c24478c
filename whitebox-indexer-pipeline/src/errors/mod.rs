//! Error types for the whitebox indexer pipeline.

use thiserror::Error;
use whitebox_indexer_repository::SearchIndexError;

/// Errors that can occur in the whitebox indexer pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A repository URL matched a known hosting domain but the contributor
    /// record lacks the corresponding identifier. This is a fatal
    /// configuration error: the run terminates rather than emit partial data.
    #[error("User {name} has no platform identifier declared for repository {repo}")]
    MissingIdentifier {
        /// The contributor's display name.
        name: String,
        /// The offending repository URL.
        repo: String,
    },

    /// Error reading the catalog file.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing the catalog file.
    #[error("Catalog parse error: {0}")]
    CatalogError(#[from] serde_yaml::Error),

    /// Error serializing a document for the search engine.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Error from the search index backend.
    #[error("Search index error: {0}")]
    SearchIndexError(#[from] SearchIndexError),
}

impl PipelineError {
    /// Create a missing-identifier error for the given contributor and URL.
    pub fn missing_identifier(name: impl Into<String>, repo: impl Into<String>) -> Self {
        Self::MissingIdentifier {
            name: name.into(),
            repo: repo.into(),
        }
    }
}
