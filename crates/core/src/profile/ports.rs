//! Port interfaces for profile lookup
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for lookup operations.

use async_trait::async_trait;
use hubcard_domain::{ProfileRecord, RepositorySummary, Result, UserSummary};

/// Read-only access to the remote profile API
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch the user document for a login.
    ///
    /// Error kinds form a closed outcome set: `NotFound` (404),
    /// `RateLimited` (403), `Network` (transport failure, timeout, or
    /// malformed body).
    async fn fetch_profile(&self, login: &str) -> Result<UserSummary>;

    /// Fetch the repository list, private entries included.
    ///
    /// `repos_url` is the URL announced by the profile document;
    /// implementations derive a default from `login` when it is absent.
    async fn fetch_repositories(
        &self,
        login: &str,
        repos_url: Option<&str>,
    ) -> Result<Vec<RepositorySummary>>;
}

/// Persistence for looked-up profile records, keyed by login
#[async_trait]
pub trait ProfileCacheRepository: Send + Sync {
    /// Get the cached record for a login, `None` on a miss
    async fn get(&self, login: &str) -> Result<Option<ProfileRecord>>;

    /// Insert or replace the record for its login
    async fn upsert(&self, record: ProfileRecord) -> Result<()>;

    /// Remove the cached record for a login
    async fn delete(&self, login: &str) -> Result<()>;
}
