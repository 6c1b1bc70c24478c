//! Dependency initialization and wiring for the whitebox indexer.

use std::sync::Arc;

use tracing::info;

use crate::IndexingError;
use whitebox_indexer_pipeline::loader::IndexLoader;
use whitebox_indexer_repository::OpenSearchClient;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The loader wired to the search cluster, ready to replace indices.
    pub loader: IndexLoader,
}

impl Dependencies {
    /// Initialize all dependencies from the connection options.
    ///
    /// # Arguments
    ///
    /// * `host` - Search cluster URL
    /// * `user` - Basic auth user name
    /// * `passwd` - Basic auth password
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If client setup fails
    pub fn new(host: &str, user: &str, passwd: &str) -> Result<Self, IndexingError> {
        let client = OpenSearchClient::new(host, user, passwd)?;

        info!("Search cluster connection configured");

        Ok(Self {
            loader: IndexLoader::new(Arc::new(client)),
        })
    }
}
