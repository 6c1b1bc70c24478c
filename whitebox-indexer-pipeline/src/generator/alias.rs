//! User-alias document generator.

use std::collections::BTreeSet;
use std::iter::once;

use crate::generator::stamp::hour_stamp;
use whitebox_indexer_shared::{AliasDocument, Catalog, Contributor};

/// Lazy stream of one [`AliasDocument`] per (contributor, distinct alias).
///
/// The alias set for a contributor is the union of their declared nicknames,
/// their three platform identifiers, and their display name, with empty
/// entries dropped. A contributor with no derivable alias contributes no
/// documents; there are no fatal conditions on this stream.
pub struct AliasDocuments<'a> {
    contributors: std::slice::Iter<'a, Contributor>,
    current: Option<(&'a Contributor, std::collections::btree_set::IntoIter<String>)>,
}

impl<'a> AliasDocuments<'a> {
    /// Create a generator over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            contributors: catalog.users.iter(),
            current: None,
        }
    }

    fn alias_set(contributor: &Contributor) -> BTreeSet<String> {
        contributor
            .alias
            .iter()
            .cloned()
            .chain(contributor.gitee_id.clone())
            .chain(contributor.github_id.clone())
            .chain(contributor.gitlab_id.clone())
            .chain(once(contributor.name.clone()))
            .filter(|alias| !alias.is_empty())
            .collect()
    }
}

impl Iterator for AliasDocuments<'_> {
    type Item = AliasDocument;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((contributor, aliases)) = self.current.as_mut() {
                if let Some(alias) = aliases.next() {
                    return Some(AliasDocument {
                        name: contributor.name.clone(),
                        alias,
                        created_at: hour_stamp(),
                    });
                }
            }

            let contributor = self.contributors.next()?;
            let aliases = Self::alias_set(contributor);
            self.current = Some((contributor, aliases.into_iter()));
        }
    }
}
