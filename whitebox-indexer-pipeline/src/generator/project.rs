//! Project document generator.

use std::collections::BTreeSet;

use tracing::info;

use crate::errors::PipelineError;
use crate::generator::identity::resolve_identifier;
use crate::generator::stamp::hour_stamp;
use whitebox_indexer_shared::{Catalog, Contributor, ProjectDocument};

/// Lazy stream of one [`ProjectDocument`] per (contributor, distinct repo).
///
/// Contributors are visited in declaration order. Within one contributor the
/// `repos` and `repos_all_branches` lists are collapsed into a set, so a URL
/// appearing in both emits a single document; order among a contributor's
/// repositories is not part of the contract.
///
/// A fatal configuration error (see [`resolve_identifier`]) surfaces as an
/// `Err` item; callers stop consuming and abort the run.
pub struct ProjectDocuments<'a> {
    contributors: std::slice::Iter<'a, Contributor>,
    current: Option<(&'a Contributor, std::collections::btree_set::IntoIter<String>)>,
}

impl<'a> ProjectDocuments<'a> {
    /// Create a generator over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            contributors: catalog.users.iter(),
            current: None,
        }
    }
}

impl Iterator for ProjectDocuments<'_> {
    type Item = Result<ProjectDocument, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((contributor, repos)) = self.current.as_mut() {
                if let Some(repo) = repos.next() {
                    let user = match resolve_identifier(contributor, &repo) {
                        Ok(user) => user,
                        Err(e) => return Some(Err(e)),
                    };

                    return Some(Ok(ProjectDocument {
                        name: contributor.name.clone(),
                        user,
                        repo,
                        created_at: hour_stamp(),
                    }));
                }
            }

            let contributor = self.contributors.next()?;
            let repos: BTreeSet<String> = contributor
                .repos
                .iter()
                .chain(contributor.repos_all_branches.iter())
                .cloned()
                .collect();

            info!(
                name = %contributor.name,
                projects = repos.len(),
                "Found contributor projects"
            );

            self.current = Some((contributor, repos.into_iter()));
        }
    }
}
