//! Loader module for the whitebox indexer pipeline.
//!
//! Replaces an index's content with a generated document stream.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::PipelineError;
use whitebox_indexer_repository::SearchIndexProvider;

/// Loader that replaces whole indices with generated document streams.
///
/// Each replacement deletes the target index (a missing index is fine) and
/// then streams documents into it one at a time. Individual insert failures
/// are logged and skipped; the stream is never retried and never rolled
/// back. The only aborting condition is an error produced by the document
/// stream itself.
pub struct IndexLoader {
    provider: Arc<dyn SearchIndexProvider>,
}

impl IndexLoader {
    /// Create a new loader backed by the given provider.
    pub fn new(provider: Arc<dyn SearchIndexProvider>) -> Self {
        Self { provider }
    }

    /// Replace the content of `index` with the given document stream.
    ///
    /// # Arguments
    ///
    /// * `index` - Name of the index to replace
    /// * `documents` - Stream of documents; an `Err` item aborts the run
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The stream was fully consumed; check the logs for
    ///   per-document insert failures
    /// * `Err(PipelineError)` - Index deletion failed or the stream produced
    ///   an error
    pub async fn replace_collection<T, I>(
        &self,
        index: &str,
        documents: I,
    ) -> Result<(), PipelineError>
    where
        T: Serialize,
        I: IntoIterator<Item = Result<T, PipelineError>>,
    {
        self.provider.delete_index(index).await?;

        let mut inserted = 0usize;
        let mut failed = 0usize;

        for document in documents {
            let document = document?;
            let body = serde_json::to_value(&document)?;

            match self.provider.insert_document(index, body).await {
                Ok(()) => inserted += 1,
                Err(e) => {
                    warn!(index = %index, error = %e, "Failed to insert doc");
                    failed += 1;
                }
            }
        }

        info!(index = %index, inserted, failed, "Load complete");
        Ok(())
    }
}
