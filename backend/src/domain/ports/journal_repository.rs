//! Driven port for journal persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::RepositoryError;
use crate::domain::{Journal, UserId};

/// Insert payload for a new journal.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJournal {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: String,
}

/// Store operations on the journals table.
#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Fetch the journal owned by the given user, if any.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Journal>, RepositoryError>;

    /// Insert a new journal row and return it.
    async fn insert(&self, journal: NewJournal) -> Result<Journal, RepositoryError>;
}
