//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    cert::CertificateValidation,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::IndicesDeleteParts,
    IndexParts, OpenSearch,
};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;

/// OpenSearch client implementation.
///
/// Connects to a single node over TLS with basic credentials. Certificate
/// verification is disabled because the target clusters sit behind
/// self-signed certificates.
///
/// # Example
///
/// ```ignore
/// let client = OpenSearchClient::new("https://search.example.com:9200", "admin", "secret")?;
/// client.delete_index("whitebox_projects").await?;
/// client.insert_document("whitebox_projects", json!({"name": "Bob"})).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The cluster URL (e.g., "https://localhost:9200")
    /// * `user` - Basic auth user name
    /// * `passwd` - Basic auth password
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchIndexError)` - If connection setup fails
    pub fn new(host: &str, user: &str, passwd: &str) -> Result<Self, SearchIndexError> {
        let parsed_url =
            Url::parse(host).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .auth(Credentials::Basic(user.to_string(), passwd.to_string()))
            .cert_validation(CertificateValidation::None)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(host = %host, user = %user, "Created OpenSearch client");

        Ok(Self { client })
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchClient {
    /// Delete an index, treating a missing index as already deleted.
    async fn delete_index(&self, index: &str) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchIndexError::delete(e.to_string()))?;

        let status = response.status_code();

        // 404 is acceptable - the index may not exist yet
        if !status.is_success() && status.as_u16() != 404 {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index delete request failed");
            return Err(SearchIndexError::delete(format!(
                "Delete of index {} failed with status {}: {}",
                index, status, error_body
            )));
        }

        debug!(index = %index, "Index deleted");
        Ok(())
    }

    /// Insert a single document, letting the backend assign its id.
    async fn insert_document(&self, index: &str, document: Value) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .index(IndexParts::Index(index))
            .body(document)
            .send()
            .await
            .map_err(|e| SearchIndexError::insert(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Insert request failed");
            return Err(SearchIndexError::insert(format!(
                "Insert into index {} failed with status {}: {}",
                index, status, error_body
            )));
        }

        debug!(index = %index, "Document inserted");
        Ok(())
    }
}
