//! Database implementations

pub mod manager;
pub mod profile_repository;

pub use manager::DbManager;
pub use profile_repository::SqliteProfileRepository;
