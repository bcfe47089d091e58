//! Common data types used throughout the application

pub mod profile;

pub use profile::{ProfileRecord, Repository, RepositorySummary, UserSummary};
