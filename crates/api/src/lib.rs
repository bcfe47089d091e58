//! # Hubcard App
//!
//! Application layer - CLI commands and wiring.
//!
//! This crate contains:
//! - Lookup commands (CLI → core bridge)
//! - Application context (dependency injection)
//! - View rendering for lookup progress and results
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Owns everything user-facing

pub mod commands;
pub mod context;
pub mod utils;
pub mod view;

// Re-export for convenience
pub use commands::{forget_profile, lookup_profile};
pub use context::AppContext;
pub use view::{ProfileView, TerminalView};
