//! Application commands

pub mod profile;

pub use profile::{forget_profile, lookup_profile};
