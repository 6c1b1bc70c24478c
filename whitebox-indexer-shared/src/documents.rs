//! Derived document types published into the search index.
//!
//! Both document kinds are write-once per run: the target index is fully
//! replaced, never merged into.

use serde::{Deserialize, Serialize};

/// One repository ownership record for the `whitebox_projects` index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDocument {
    /// Contributor display name.
    pub name: String,
    /// Platform identifier owning the repository. Empty only for URLs on an
    /// unrecognized hosting domain.
    pub user: String,
    /// Repository URL.
    pub repo: String,
    /// Hour-granularity timestamp, fixed UTC+8 offset.
    pub created_at: String,
}

/// One name-to-alias mapping for the `whitebox_users` index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasDocument {
    /// Contributor display name.
    pub name: String,
    /// One string the contributor is known by: the display name itself, a
    /// platform handle, or a declared nickname.
    pub alias: String,
    /// Hour-granularity timestamp, fixed UTC+8 offset.
    pub created_at: String,
}
