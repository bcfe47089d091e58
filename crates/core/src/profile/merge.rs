//! Merge and filtering rules for looked-up profiles
//!
//! Pure functions: the same inputs always produce the same record state,
//! and projecting a repository list twice yields the same output.

use hubcard_domain::constants::{EMAIL_PLACEHOLDER, PROFILE_WEB_BASE};
use hubcard_domain::{ProfileRecord, Repository, RepositorySummary, UserSummary};

/// Merge display fields from a user document into the record.
///
/// Defaults applied: missing name becomes empty, missing email becomes the
/// placeholder text, missing follower count becomes 0, a missing profile URL
/// and the followers URL are derived from the login.
pub fn merge_profile(record: &mut ProfileRecord, requested_login: &str, summary: &UserSummary) {
    let login = summary.login.as_deref().unwrap_or(requested_login);

    record.name = Some(summary.name.clone().unwrap_or_default());
    record.email = Some(summary.email.clone().unwrap_or_else(|| EMAIL_PLACEHOLDER.to_string()));
    record.url =
        Some(summary.html_url.clone().unwrap_or_else(|| format!("{PROFILE_WEB_BASE}/{login}")));
    record.follower_count = Some(summary.followers.unwrap_or(0));
    record.followers_url = Some(format!("{PROFILE_WEB_BASE}/{login}/followers"));
}

/// Drop private entries and project the remainder to display shape.
pub fn project_public(repositories: &[RepositorySummary]) -> Vec<Repository> {
    repositories
        .iter()
        .filter(|repo| !repo.private)
        .map(|repo| Repository {
            name: repo.name.clone(),
            url: repo.url.clone(),
            description: repo.description.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, private: bool) -> RepositorySummary {
        RepositorySummary {
            name: name.to_string(),
            url: format!("https://x/{name}"),
            description: Some("d".to_string()),
            private,
        }
    }

    #[test]
    fn merge_applies_defaults_for_missing_fields() {
        let mut record = ProfileRecord::new("octocat");
        let summary = UserSummary::default();

        merge_profile(&mut record, "octocat", &summary);

        assert_eq!(record.name.as_deref(), Some(""));
        assert_eq!(record.email.as_deref(), Some(EMAIL_PLACEHOLDER));
        assert_eq!(record.url.as_deref(), Some("https://github.com/octocat"));
        assert_eq!(record.follower_count, Some(0));
        assert_eq!(record.followers_url.as_deref(), Some("https://github.com/octocat/followers"));
    }

    #[test]
    fn merge_prefers_document_fields() {
        let mut record = ProfileRecord::new("octocat");
        let summary = UserSummary {
            login: Some("octocat".to_string()),
            name: Some("Mona".to_string()),
            email: Some("mona@github.com".to_string()),
            html_url: Some("https://x/octocat".to_string()),
            followers: Some(10),
            repos_url: None,
        };

        merge_profile(&mut record, "octocat", &summary);

        assert_eq!(record.name.as_deref(), Some("Mona"));
        assert_eq!(record.email.as_deref(), Some("mona@github.com"));
        assert_eq!(record.url.as_deref(), Some("https://x/octocat"));
        assert_eq!(record.follower_count, Some(10));
    }

    #[test]
    fn merge_derives_urls_from_document_login_when_present() {
        let mut record = ProfileRecord::new("OCTOCAT");
        let summary = UserSummary { login: Some("octocat".to_string()), ..UserSummary::default() };

        merge_profile(&mut record, "OCTOCAT", &summary);

        assert_eq!(record.url.as_deref(), Some("https://github.com/octocat"));
        assert_eq!(record.followers_url.as_deref(), Some("https://github.com/octocat/followers"));
    }

    #[test]
    fn projection_excludes_private_and_preserves_order() {
        let input = vec![repo("hello", false), repo("secret", true), repo("world", false)];

        let projected = project_public(&input);

        assert_eq!(projected.len(), 2);
        assert_eq!(projected[0].name, "hello");
        assert_eq!(projected[1].name, "world");
    }

    #[test]
    fn projection_is_idempotent() {
        let input = vec![repo("hello", false), repo("secret", true)];

        let first = project_public(&input);
        let second = project_public(&input);

        assert_eq!(first, second);
    }

    #[test]
    fn projection_of_empty_input_is_empty() {
        assert!(project_public(&[]).is_empty());
    }
}
