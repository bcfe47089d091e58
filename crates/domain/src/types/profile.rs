//! Profile record types
//!
//! The cached, mergeable representation of one looked-up GitHub account,
//! plus the raw summaries produced by the API adapter before merging.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::FRESHNESS_WINDOW_SECS;

/// One public repository as rendered and persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
}

/// Cached record for one looked-up account, keyed by `login`
///
/// Display fields are `None` until the first successful profile merge.
/// Unknown fields in persisted JSON are ignored on read so older cache rows
/// survive additive schema changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub follower_count: Option<u32>,
    #[serde(default)]
    pub followers_url: Option<String>,
    /// Public repositories only, in API order
    #[serde(default)]
    pub repositories: Vec<Repository>,
    /// Unix timestamp of the last successful full refresh
    #[serde(default)]
    pub fetched_at: Option<i64>,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Transient flag, never persisted
    #[serde(skip)]
    pub served_from_cache: bool,
}

impl ProfileRecord {
    /// Empty record for a username with no cached state
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: None,
            email: None,
            url: None,
            follower_count: None,
            followers_url: None,
            repositories: Vec::new(),
            fetched_at: None,
            error: false,
            message: None,
            served_from_cache: false,
        }
    }

    /// Whether the record was fully refreshed within the freshness window
    pub fn is_fresh_at(&self, now: i64) -> bool {
        match self.fetched_at {
            Some(fetched_at) => now.saturating_sub(fetched_at) <= FRESHNESS_WINDOW_SECS,
            None => false,
        }
    }

    /// Whether the record is fresh right now
    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(Utc::now().timestamp())
    }

    /// Whole days elapsed since the last successful refresh
    pub fn cache_age_days_at(&self, now: i64) -> Option<i64> {
        self.fetched_at.map(|fetched_at| now.saturating_sub(fetched_at).max(0) / (24 * 60 * 60))
    }
}

/// Tolerant projection of the GitHub user document
///
/// Every field is optional: the merge step applies display defaults, and the
/// adapter derives `repos_url` when the document omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub login: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub html_url: Option<String>,
    pub followers: Option<u32>,
    pub repos_url: Option<String>,
}

/// One repository entry as returned by the API, before the public-only filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub private: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_within_window() {
        let mut record = ProfileRecord::new("octocat");
        assert!(!record.is_fresh_at(1_000_000));

        record.fetched_at = Some(1_000_000);
        assert!(record.is_fresh_at(1_000_000 + FRESHNESS_WINDOW_SECS));
        assert!(!record.is_fresh_at(1_000_000 + FRESHNESS_WINDOW_SECS + 1));
    }

    #[test]
    fn cache_age_in_whole_days() {
        let mut record = ProfileRecord::new("octocat");
        assert_eq!(record.cache_age_days_at(1_000_000), None);

        record.fetched_at = Some(0);
        assert_eq!(record.cache_age_days_at(3 * 24 * 60 * 60 + 10), Some(3));
        assert_eq!(record.cache_age_days_at(60), Some(0));
    }

    #[test]
    fn served_from_cache_is_not_serialized() {
        let mut record = ProfileRecord::new("octocat");
        record.served_from_cache = true;

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("served_from_cache"));

        let restored: ProfileRecord = serde_json::from_str(&json).unwrap();
        assert!(!restored.served_from_cache);
    }

    #[test]
    fn unknown_fields_are_ignored_on_read() {
        let json = r#"{"login":"octocat","future_field":42}"#;
        let record: ProfileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.login, "octocat");
        assert!(record.repositories.is_empty());
        assert!(!record.error);
    }
}
