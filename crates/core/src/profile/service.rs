//! Profile lookup service - core business logic

use std::sync::Arc;

use chrono::Utc;
use hubcard_domain::constants::{
    MSG_NETWORK_OR_PARSE, MSG_RATE_LIMITED, MSG_USER_NOT_FOUND, PROGRESS_DONE, WEIGHT_CACHE_READ,
    WEIGHT_PROFILE_FETCH, WEIGHT_REPO_FETCH,
};
use hubcard_domain::{HubcardError, ProfileRecord, Result};
use tracing::{debug, warn};

use super::merge;
use super::ports::{ProfileApi, ProfileCacheRepository};
use super::progress::{ProgressFn, ProgressReporter};

/// Phase of a lookup, threaded explicitly through the flow.
///
/// Each phase carries the progress weight of its own work, so the reported
/// positions are derived from the state transitions rather than tracked
/// separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    FetchingProfile,
    FetchingRepos,
    Done,
    Failed,
}

impl LookupState {
    /// Progress weight of the work performed while in this phase.
    pub fn step_weight(self) -> Option<u8> {
        match self {
            LookupState::Idle => Some(WEIGHT_CACHE_READ),
            LookupState::FetchingProfile => Some(WEIGHT_PROFILE_FETCH),
            LookupState::FetchingRepos => Some(WEIGHT_REPO_FETCH),
            LookupState::Done | LookupState::Failed => None,
        }
    }

    /// Next phase when the current one completes successfully.
    pub fn advance(self) -> LookupState {
        match self {
            LookupState::Idle => LookupState::FetchingProfile,
            LookupState::FetchingProfile => LookupState::FetchingRepos,
            LookupState::FetchingRepos | LookupState::Done => LookupState::Done,
            LookupState::Failed => LookupState::Failed,
        }
    }
}

/// Profile lookup service
///
/// Resolves a username by consulting the cache first and refreshing over the
/// network when the cached record is stale or absent. Lookups for different
/// usernames are independent; two concurrent lookups for the same username
/// are not deduplicated and the last successful cache write wins.
pub struct LookupService {
    api: Arc<dyn ProfileApi>,
    cache: Arc<dyn ProfileCacheRepository>,
}

impl LookupService {
    /// Create a new lookup service
    pub fn new(api: Arc<dyn ProfileApi>, cache: Arc<dyn ProfileCacheRepository>) -> Self {
        Self { api, cache }
    }

    /// Resolve a username to a profile record, reporting progress.
    ///
    /// `on_progress` is invoked one or more times and terminates at progress
    /// exactly 100. Lookup-level failures (not found, rate limited, network
    /// or parse errors) are folded into the returned record (`error = true`
    /// plus a message); `Err` is reserved for internal failures. A failed
    /// refresh never evicts a previously cached record.
    pub async fn lookup(&self, username: &str, on_progress: &ProgressFn<'_>) -> Result<ProfileRecord> {
        let mut record = self.read_cached(username).await;

        if record.is_fresh() {
            debug!(username, "cached record is fresh, skipping network refresh");
            on_progress(&record, PROGRESS_DONE, None);
            return Ok(record);
        }

        let mut progress = ProgressReporter::new(on_progress);
        let mut state = LookupState::Idle;

        // The cache read completes the Idle phase
        let completed = state.step_weight().unwrap_or(0);
        state = state.advance();
        progress.step(&record, completed, state.step_weight());

        let summary = match self.api.fetch_profile(username).await {
            Ok(summary) => summary,
            Err(err) => return Ok(Self::fail(record, state, &err, &mut progress)),
        };
        merge::merge_profile(&mut record, username, &summary);

        let completed = state.step_weight().unwrap_or(0);
        state = state.advance();
        progress.step(&record, completed, state.step_weight());

        let repositories =
            match self.api.fetch_repositories(username, summary.repos_url.as_deref()).await {
                Ok(repositories) => repositories,
                Err(err) => return Ok(Self::fail(record, state, &err, &mut progress)),
            };

        record.repositories = merge::project_public(&repositories);
        record.fetched_at = Some(Utc::now().timestamp());
        record.served_from_cache = false;

        let completed = state.step_weight().unwrap_or(0);
        state = state.advance();
        debug!(username, ?state, repo_count = record.repositories.len(), "lookup complete");

        // The record is already complete in memory; a persist failure only
        // costs the next lookup a refresh.
        if let Err(err) = self.cache.upsert(record.clone()).await {
            warn!(username, error = %err, "failed to persist looked-up profile");
        }

        progress.step(&record, completed, state.step_weight());
        Ok(record)
    }

    /// Cache read with tolerant-miss semantics: unreadable state is a miss.
    async fn read_cached(&self, username: &str) -> ProfileRecord {
        match self.cache.get(username).await {
            Ok(Some(mut cached)) => {
                cached.served_from_cache = true;
                cached
            }
            Ok(None) => ProfileRecord::new(username),
            Err(err) => {
                warn!(username, error = %err, "cache read failed, treating as miss");
                ProfileRecord::new(username)
            }
        }
    }

    fn fail(
        mut record: ProfileRecord,
        failed_during: LookupState,
        err: &HubcardError,
        progress: &mut ProgressReporter<'_>,
    ) -> ProfileRecord {
        let state = LookupState::Failed;
        warn!(login = %record.login, ?state, ?failed_during, error = %err, "lookup failed");

        record.error = true;
        let mut message = outcome_message(err).to_string();
        if record.served_from_cache {
            message.push_str(&cache_age_suffix(&record));
        }
        record.message = Some(message);

        progress.finish(&record);
        record
    }
}

/// Map an error kind to its user-facing lookup message (closed set)
fn outcome_message(err: &HubcardError) -> &'static str {
    match err {
        HubcardError::NotFound(_) => MSG_USER_NOT_FOUND,
        HubcardError::RateLimited(_) => MSG_RATE_LIMITED,
        _ => MSG_NETWORK_OR_PARSE,
    }
}

fn cache_age_suffix(record: &ProfileRecord) -> String {
    match record.cache_age_days_at(Utc::now().timestamp()) {
        Some(days) => format!("; data served from cache, last updated {days} day(s) ago"),
        None => "; data served from cache and may be outdated".to_string(),
    }
}
