//! Embedded migration runner executed once at startup.
//!
//! `diesel_migrations` only supports synchronous connections, so the run
//! happens on the blocking pool with a dedicated short-lived connection
//! rather than through the async pool.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {0}")]
    Connection(String),

    #[error("failed to apply migrations: {0}")]
    Apply(String),

    #[error("migration task failed: {0}")]
    Task(String),
}

/// Apply any pending migrations against the given database.
pub async fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let database_url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&database_url)
            .map_err(|err| MigrationError::Connection(err.to_string()))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.len())
            .map_err(|err| MigrationError::Apply(err.to_string()))
    })
    .await
    .map_err(|err| MigrationError::Task(err.to_string()))??;

    info!(applied, "database migrations up to date");
    Ok(())
}
