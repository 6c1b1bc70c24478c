//! Catalog loading.
//!
//! Reads the contributor catalog from its YAML file into an immutable
//! in-memory structure, once per run. Both generators share the same loaded
//! catalog, so the two derived streams always describe the same input.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::PipelineError;
use whitebox_indexer_shared::Catalog;

/// Fixed relative path of the catalog file.
pub const CATALOG_PATH: &str = "./data.yml";

/// Load the catalog from the given path.
///
/// # Returns
///
/// * `Ok(Catalog)` - The parsed catalog
/// * `Err(PipelineError)` - If the file cannot be read or parsed
pub fn load(path: impl AsRef<Path>) -> Result<Catalog, PipelineError> {
    let text = fs::read_to_string(path.as_ref())?;
    let catalog: Catalog = serde_yaml::from_str(&text)?;

    info!(
        path = %path.as_ref().display(),
        users = catalog.users.len(),
        "Loaded contributor catalog"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile_path("catalog_load");
        writeln!(file.1, "users:\n  - name: Bob\n    github_id: bob99").unwrap();
        drop(file.1);

        let catalog = load(&file.0).unwrap();
        assert_eq!(catalog.users.len(), 1);
        assert_eq!(catalog.users[0].name, "Bob");

        fs::remove_file(&file.0).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load("./no-such-catalog.yml");
        assert!(matches!(result, Err(PipelineError::IoError(_))));
    }

    #[test]
    fn test_load_malformed_yaml_is_catalog_error() {
        let mut file = tempfile_path("catalog_malformed");
        writeln!(file.1, "users: [unclosed").unwrap();
        drop(file.1);

        let result = load(&file.0);
        assert!(matches!(result, Err(PipelineError::CatalogError(_))));

        fs::remove_file(&file.0).unwrap();
    }

    fn tempfile_path(tag: &str) -> (std::path::PathBuf, fs::File) {
        let path = std::env::temp_dir().join(format!("whitebox_{}_{}.yml", tag, std::process::id()));
        let file = fs::File::create(&path).unwrap();
        (path, file)
    }
}
