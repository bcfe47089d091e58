//! # Hubcard Domain
//!
//! Business domain types and models for hubcard.
//!
//! This crate contains:
//! - Profile record and repository types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (freshness window, progress weights, messages)
//!
//! ## Architecture
//! - No dependencies on other hubcard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
