//! Application context - dependency injection container

use std::sync::Arc;

use hubcard_core::{LookupService, ProfileApi, ProfileCacheRepository};
use hubcard_domain::{Config, HubcardError, Result};
use hubcard_infra::{DbManager, GitHubClient, SqliteProfileRepository};
use tracing::info;

/// Type alias for profile API port trait object
type DynProfileApi = dyn ProfileApi + 'static;

/// Type alias for profile cache repository port trait object
type DynProfileCacheRepository = dyn ProfileCacheRepository + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub profile_cache: Arc<DynProfileCacheRepository>,
    pub lookup_service: Arc<LookupService>,
}

impl AppContext {
    /// Create a new application context with default configuration
    pub fn new() -> Result<Self> {
        Self::new_with_config(Config::default())
    }

    /// Create a new application context with custom configuration
    ///
    /// Tests use this to point the API client at a mock server and the cache
    /// at a per-test database file.
    pub fn new_with_config(config: Config) -> Result<Self> {
        // Initialize the cache database and ensure the schema exists
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;
        info!(db_path = %db.path().display(), "cache database ready");

        let profile_cache: Arc<DynProfileCacheRepository> =
            Arc::new(SqliteProfileRepository::new(Arc::clone(&db)));

        let api: Arc<DynProfileApi> = Arc::new(GitHubClient::new(&config.github)?);

        let lookup_service =
            Arc::new(LookupService::new(Arc::clone(&api), Arc::clone(&profile_cache)));

        Ok(Self { config, db, profile_cache, lookup_service })
    }

    /// Check database connectivity.
    ///
    /// Uses spawn_blocking to keep the synchronous pool access off the async
    /// runtime.
    pub async fn health_check(&self) -> Result<()> {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || db.health_check())
            .await
            .map_err(|e| HubcardError::Internal(format!("health check task failed: {e}")))?
    }
}
