//! Search index provider trait definition.
//!
//! This module defines the abstract interface for the two index primitives
//! the indexer consumes, allowing for different backend implementations
//! (OpenSearch, Elasticsearch, mock, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchIndexError;

/// Abstracts the underlying search index implementation.
///
/// Implementations are injected into the loader to enable dependency
/// injection and easy testing with mock implementations.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Delete an index and everything in it.
    ///
    /// If the index doesn't exist, the operation is considered successful.
    ///
    /// # Arguments
    ///
    /// * `index` - Name of the index to delete
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was deleted (or didn't exist)
    /// * `Err(SearchIndexError)` - If the deletion fails
    async fn delete_index(&self, index: &str) -> Result<(), SearchIndexError>;

    /// Insert a single document into an index.
    ///
    /// The index is created implicitly by the backend on first insert.
    ///
    /// # Arguments
    ///
    /// * `index` - Name of the target index
    /// * `document` - The document body as JSON
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was inserted successfully
    /// * `Err(SearchIndexError)` - If the insert fails
    async fn insert_document(&self, index: &str, document: Value) -> Result<(), SearchIndexError>;
}
