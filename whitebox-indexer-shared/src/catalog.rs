//! Contributor catalog types.
//!
//! The catalog is the declarative source of truth for which contributors and
//! repositories get indexed. It is loaded once per run and shared read-only
//! by both document generators.

use serde::{Deserialize, Serialize};

/// The top-level catalog structure: a flat list of contributors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// All contributors, in declaration order.
    #[serde(default)]
    pub users: Vec<Contributor>,
}

/// One contributor entry from the catalog.
///
/// Only `name` is required. The three platform identifiers correspond to the
/// supported code-hosting domains; a repository URL on one of those domains
/// requires the matching identifier to be declared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contributor {
    /// Display name.
    pub name: String,

    /// Account handle on gitee.com.
    #[serde(default)]
    pub gitee_id: Option<String>,

    /// Account handle on github.com.
    #[serde(default)]
    pub github_id: Option<String>,

    /// Account handle on gitlab.com.
    #[serde(default)]
    pub gitlab_id: Option<String>,

    /// Repository URLs tracked on their default branch only.
    #[serde(default)]
    pub repos: Vec<String>,

    /// Repository URLs tracked across all branches.
    #[serde(default)]
    pub repos_all_branches: Vec<String>,

    /// Explicitly declared nicknames, in addition to the platform handles.
    #[serde(default)]
    pub alias: Vec<String>,
}
