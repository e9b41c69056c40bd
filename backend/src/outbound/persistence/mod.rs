//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations here are thin: they translate between
//! Diesel row structs and domain types, and map store failures to
//! [`crate::domain::ports::RepositoryError`]. Row structs (`models.rs`)
//! and table definitions (`schema.rs`) never leak past this module.
//! Connections come from a `bb8` pool over `diesel-async`.

mod diesel_entry_repository;
mod diesel_inspiration_repository;
mod diesel_journal_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_entry_repository::DieselEntryRepository;
pub use diesel_inspiration_repository::DieselInspirationRepository;
pub use diesel_journal_repository::DieselJournalRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
