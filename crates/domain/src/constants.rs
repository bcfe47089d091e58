//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Cache freshness
pub const FRESHNESS_WINDOW_SECS: i64 = 24 * 60 * 60;

// Progress step weights; the three steps sum to exactly 100
pub const WEIGHT_CACHE_READ: u8 = 1;
pub const WEIGHT_PROFILE_FETCH: u8 = 49;
pub const WEIGHT_REPO_FETCH: u8 = 50;
pub const PROGRESS_DONE: u8 = 100;

// User-facing lookup messages
pub const MSG_USER_NOT_FOUND: &str = "user not found";
pub const MSG_RATE_LIMITED: &str = "rate limit exceeded";
pub const MSG_NETWORK_OR_PARSE: &str = "network or parse error";

/// Placeholder shown when a profile has no public email
pub const EMAIL_PLACEHOLDER: &str = "not specified";

// GitHub API defaults
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_USER_AGENT: &str = "hubcard";
pub const PROFILE_WEB_BASE: &str = "https://github.com";

// Database defaults
pub const DEFAULT_DB_PATH: &str = "hubcard.db";
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
