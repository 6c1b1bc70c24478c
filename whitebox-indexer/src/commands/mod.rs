//! Command implementations for the indexer CLI.

use whitebox_indexer_pipeline::generator::{AliasDocuments, ProjectDocuments};
use whitebox_indexer_pipeline::loader::IndexLoader;
use whitebox_indexer_shared::Catalog;

use crate::IndexingError;

/// Index holding one document per (contributor, repository).
pub const PROJECTS_INDEX: &str = "whitebox_projects";

/// Index holding one document per (contributor, alias).
pub const USERS_INDEX: &str = "whitebox_users";

/// Print every derived document to stdout without contacting the cluster.
///
/// Project lines are `name user repo`, alias lines are `name alias`. A fatal
/// configuration error in the catalog aborts the printout.
pub fn check(catalog: &Catalog) -> Result<(), IndexingError> {
    for document in ProjectDocuments::new(catalog) {
        let document = document?;
        println!("{} {} {}", document.name, document.user, document.repo);
    }

    for document in AliasDocuments::new(catalog) {
        println!("{} {}", document.name, document.alias);
    }

    Ok(())
}

/// Replace both target indices with freshly derived documents.
///
/// Runs a validation pass over the project stream first: a catalog entry
/// with a missing platform identifier aborts the run before either index is
/// deleted, so a bad catalog can never leave an index empty or half loaded.
pub async fn import(catalog: &Catalog, loader: &IndexLoader) -> Result<(), IndexingError> {
    for document in ProjectDocuments::new(catalog) {
        document?;
    }

    loader
        .replace_collection(PROJECTS_INDEX, ProjectDocuments::new(catalog))
        .await?;

    loader
        .replace_collection(USERS_INDEX, AliasDocuments::new(catalog).map(Ok))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use whitebox_indexer_repository::{SearchIndexError, SearchIndexProvider};
    use whitebox_indexer_shared::Contributor;

    #[derive(Default)]
    struct RecordingProvider {
        deletes: Mutex<Vec<String>>,
        inserts: Mutex<Vec<(String, Value)>>,
    }

    #[async_trait]
    impl SearchIndexProvider for RecordingProvider {
        async fn delete_index(&self, index: &str) -> Result<(), SearchIndexError> {
            self.deletes.lock().unwrap().push(index.to_string());
            Ok(())
        }

        async fn insert_document(
            &self,
            index: &str,
            document: Value,
        ) -> Result<(), SearchIndexError> {
            self.inserts
                .lock()
                .unwrap()
                .push((index.to_string(), document));
            Ok(())
        }
    }

    fn valid_catalog() -> Catalog {
        Catalog {
            users: vec![Contributor {
                name: "Bob".to_string(),
                github_id: Some("bob99".to_string()),
                repos: vec!["https://github.com/bob99/x".to_string()],
                ..Default::default()
            }],
        }
    }

    #[tokio::test]
    async fn test_import_fills_both_indices() {
        let provider = Arc::new(RecordingProvider::default());
        let loader = IndexLoader::new(provider.clone());

        import(&valid_catalog(), &loader).await.unwrap();

        assert_eq!(
            *provider.deletes.lock().unwrap(),
            vec![PROJECTS_INDEX.to_string(), USERS_INDEX.to_string()]
        );

        let inserts = provider.inserts.lock().unwrap();
        let projects: Vec<_> = inserts.iter().filter(|(i, _)| i == PROJECTS_INDEX).collect();
        let users: Vec<_> = inserts.iter().filter(|(i, _)| i == USERS_INDEX).collect();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].1["user"], "bob99");
        // aliases: "Bob" and "bob99"
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_import_validates_before_touching_indices() {
        let provider = Arc::new(RecordingProvider::default());
        let loader = IndexLoader::new(provider.clone());

        let catalog = Catalog {
            users: vec![Contributor {
                name: "Broken".to_string(),
                repos: vec!["https://github.com/nobody/x".to_string()],
                ..Default::default()
            }],
        };

        let result = import(&catalog, &loader).await;

        assert!(result.is_err());
        assert!(provider.deletes.lock().unwrap().is_empty());
        assert!(provider.inserts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_check_rejects_broken_catalog() {
        let catalog = Catalog {
            users: vec![Contributor {
                name: "Broken".to_string(),
                repos: vec!["https://gitee.com/nobody/x".to_string()],
                ..Default::default()
            }],
        };

        assert!(check(&catalog).is_err());
    }

    #[test]
    fn test_check_accepts_valid_catalog() {
        assert!(check(&valid_catalog()).is_ok());
    }
}
