//! Configuration loader
//!
//! Loads application configuration from a file and environment variables.
//!
//! ## Loading Strategy
//! 1. Probes multiple paths for a config file (JSON or TOML)
//! 2. Falls back to built-in defaults when no file is found
//! 3. Environment variables override values from either source
//!
//! ## Environment Variables
//! - `HUBCARD_DB_PATH`: Cache database file path
//! - `HUBCARD_DB_POOL_SIZE`: Connection pool size
//! - `HUBCARD_API_BASE`: GitHub API base URL
//! - `HUBCARD_HTTP_TIMEOUT`: Per-request timeout in seconds
//! - `HUBCARD_USER_AGENT`: User-Agent header for API requests
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./hubcard.json` or `./hubcard.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. Parent directory variants of the above
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use hubcard_domain::{Config, HubcardError, Result};

/// Load configuration with automatic fallback strategy
///
/// Starts from a config file when one is found, otherwise from defaults,
/// then applies environment variable overrides on top.
///
/// # Errors
/// Returns `HubcardError::Config` if a config file exists but cannot be
/// parsed, or an environment override has an invalid value.
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("no config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `HubcardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(HubcardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            HubcardError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| HubcardError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| HubcardError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| HubcardError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(HubcardError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Apply environment variable overrides on top of a loaded config.
fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(path) = std::env::var("HUBCARD_DB_PATH") {
        config.database.path = path;
    }
    if let Some(pool_size) = env_parse::<u32>("HUBCARD_DB_POOL_SIZE")? {
        config.database.pool_size = pool_size;
    }
    if let Ok(api_base) = std::env::var("HUBCARD_API_BASE") {
        config.github.api_base = api_base;
    }
    if let Some(timeout) = env_parse::<u64>("HUBCARD_HTTP_TIMEOUT")? {
        config.github.timeout_seconds = timeout;
    }
    if let Ok(user_agent) = std::env::var("HUBCARD_USER_AGENT") {
        config.github.user_agent = user_agent;
    }
    Ok(())
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("hubcard.json"),
            cwd.join("hubcard.toml"),
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("../hubcard.json"),
            cwd.join("../hubcard.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("hubcard.json"),
                exe_dir.join("hubcard.toml"),
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
            ]);
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `HubcardError::Config` if the variable is set but unparsable.
fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| HubcardError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(None),
    }
}
