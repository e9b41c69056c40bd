//! Domain ports.
//!
//! Driving ports (`JournalsCommand`, `JournalsQuery`, …) are the use-case
//! traits inbound adapters call; driven ports (`*Repository`,
//! `TokenVerifier`) are the seams outbound adapters implement. Handlers
//! and services depend only on these traits, so tests substitute
//! deterministic in-memory implementations.

mod entry_repository;
mod inspiration_repository;
mod inspirations;
mod journal_repository;
mod journals;
mod token_verifier;
mod user_repository;

pub use entry_repository::EntryRepository;
pub use inspiration_repository::InspirationRepository;
pub use inspirations::{InspirationsCommand, InspirationsQuery};
pub use journal_repository::{JournalRepository, NewJournal};
pub use journals::{CreatedJournal, JournalsCommand, JournalsQuery};
pub use token_verifier::{FixtureTokenVerifier, TokenVerifier};
pub use user_repository::UserRepository;

/// Failures surfaced by driven store ports.
///
/// Services map both variants to [`crate::domain::ErrorCode::InternalError`];
/// the distinction exists for logging and for adapter unit tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// Could not obtain or keep a store connection.
    #[error("store connection failed: {message}")]
    Connection { message: String },
    /// The store rejected or failed the statement.
    #[error("store query failed: {message}")]
    Query { message: String },
}

impl RepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
