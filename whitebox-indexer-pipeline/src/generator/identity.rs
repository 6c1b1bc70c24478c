//! Identity resolution.
//!
//! Maps a repository URL to the contributor identifier that owns it, based
//! on which hosting domain the URL belongs to.

use tracing::warn;

use crate::errors::PipelineError;
use whitebox_indexer_shared::Contributor;

/// Hosting domains checked in order against the repository URL.
const GITEE_DOMAIN: &str = "gitee.com";
const GITHUB_DOMAIN: &str = "github.com";
const GITLAB_DOMAIN: &str = "gitlab.com";

/// Resolve the platform identifier owning a repository URL.
///
/// The URL is matched against the three supported hosting domains in a fixed
/// order (gitee, then github, then gitlab) and the corresponding identifier
/// field is selected from the contributor record.
///
/// A URL on a recognized domain whose identifier is empty or undeclared is a
/// fatal configuration error: a malformed catalog must not silently produce
/// partial data. A URL on an unrecognized domain resolves to an empty
/// identifier with a warning.
///
/// # Returns
///
/// * `Ok(String)` - The owning identifier (empty for unrecognized domains)
/// * `Err(PipelineError::MissingIdentifier)` - Recognized domain, no identifier
pub fn resolve_identifier(user: &Contributor, repo: &str) -> Result<String, PipelineError> {
    let id = if repo.contains(GITEE_DOMAIN) {
        user.gitee_id.as_deref()
    } else if repo.contains(GITHUB_DOMAIN) {
        user.github_id.as_deref()
    } else if repo.contains(GITLAB_DOMAIN) {
        user.gitlab_id.as_deref()
    } else {
        warn!(
            name = %user.name,
            repo = %repo,
            "Repository is on an unrecognized hosting domain, indexing without an owner identifier"
        );
        return Ok(String::new());
    };

    match id {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(PipelineError::missing_identifier(&user.name, repo)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributor() -> Contributor {
        Contributor {
            name: "Ada".to_string(),
            gitee_id: Some("ada-gitee".to_string()),
            github_id: Some("ada-github".to_string()),
            gitlab_id: Some("ada-gitlab".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolves_each_platform() {
        let user = contributor();

        assert_eq!(
            resolve_identifier(&user, "https://gitee.com/ada/x").unwrap(),
            "ada-gitee"
        );
        assert_eq!(
            resolve_identifier(&user, "https://github.com/ada/x").unwrap(),
            "ada-github"
        );
        assert_eq!(
            resolve_identifier(&user, "https://gitlab.com/ada/x").unwrap(),
            "ada-gitlab"
        );
    }

    #[test]
    fn test_gitee_wins_when_url_mentions_both_domains() {
        let user = contributor();

        let id = resolve_identifier(&user, "https://gitee.com/mirrors/github.com-tools").unwrap();
        assert_eq!(id, "ada-gitee");
    }

    #[test]
    fn test_missing_identifier_is_fatal() {
        let user = Contributor {
            name: "Ada".to_string(),
            ..Default::default()
        };

        let err = resolve_identifier(&user, "https://github.com/ada/x").unwrap_err();
        match err {
            PipelineError::MissingIdentifier { name, repo } => {
                assert_eq!(name, "Ada");
                assert_eq!(repo, "https://github.com/ada/x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_identifier_is_fatal_too() {
        let user = Contributor {
            name: "Ada".to_string(),
            github_id: Some(String::new()),
            ..Default::default()
        };

        assert!(resolve_identifier(&user, "https://github.com/ada/x").is_err());
    }

    #[test]
    fn test_diagnostic_names_user_and_url() {
        let user = Contributor {
            name: "Ada".to_string(),
            ..Default::default()
        };

        let err = resolve_identifier(&user, "https://gitlab.com/ada/x").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Ada"));
        assert!(message.contains("https://gitlab.com/ada/x"));
    }

    #[test]
    fn test_unrecognized_domain_resolves_empty() {
        let user = contributor();

        let id = resolve_identifier(&user, "https://example.org/ada/x").unwrap();
        assert!(id.is_empty());
    }
}
