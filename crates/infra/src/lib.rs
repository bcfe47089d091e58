//! # Hubcard Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Database implementations (SQLite cache)
//! - HTTP client and the GitHub REST adapter
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `hubcard-core`
//! - Depends on `hubcard-domain` and `hubcard-core`
//! - Contains all "impure" code (I/O, network)

pub mod config;
pub mod database;
pub mod errors;
pub mod github;
pub mod http;

pub use database::{DbManager, SqliteProfileRepository};
pub use errors::InfraError;
pub use github::GitHubClient;
pub use http::HttpClient;
