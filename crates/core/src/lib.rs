//! # Hubcard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The profile lookup service (cache-then-fetch reconciliation)
//! - Port/adapter interfaces (traits)
//! - Merge and filtering rules, progress accounting
//!
//! ## Architecture Principles
//! - Only depends on `hubcard-domain`
//! - No database or HTTP code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod profile;

// Re-export specific items to avoid ambiguity
pub use profile::merge::{merge_profile, project_public};
pub use profile::ports::{ProfileApi, ProfileCacheRepository};
pub use profile::progress::ProgressFn;
pub use profile::service::{LookupService, LookupState};
