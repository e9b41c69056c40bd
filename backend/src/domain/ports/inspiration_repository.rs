//! Driven port for inspiration persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Inspiration;
use crate::domain::ports::RepositoryError;

/// Store operations on the inspirations table.
#[async_trait]
pub trait InspirationRepository: Send + Sync {
    /// Insert a new inspiration row and return it.
    async fn insert(&self, id: Uuid, text: String) -> Result<Inspiration, RepositoryError>;

    /// Fetch one inspiration by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Inspiration>, RepositoryError>;

    /// List all inspirations in store natural order.
    async fn list(&self) -> Result<Vec<Inspiration>, RepositoryError>;

    /// Delete an inspiration; returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
