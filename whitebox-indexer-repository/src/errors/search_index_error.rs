//! Search index error types.
//!
//! This module defines the error types that can occur during search index
//! operations.

use thiserror::Error;

/// Errors that can occur during search index operations.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Failed to establish connection to the search engine.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to delete an index.
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// Failed to insert a document.
    #[error("Insert error: {0}")]
    InsertError(String),

    /// Failed to serialize a document for the search engine.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SearchIndexError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a delete error.
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    /// Create an insert error.
    pub fn insert(msg: impl Into<String>) -> Self {
        Self::InsertError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }
}
