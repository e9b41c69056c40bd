//! Driven port for user persistence.

use async_trait::async_trait;

use crate::domain::ports::RepositoryError;
use crate::domain::{User, UserId};

/// Store operations on the users table.
///
/// Lookups signal absence with `None` rather than an error; callers decide
/// whether absence is a failure (entry operations) or an expected case
/// (journal creation's create-if-missing path).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by subject id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Record a user, keeping the existing row when one is already
    /// present. Implementations must make this idempotent at the store
    /// level (insert with conflict-do-nothing, then read back).
    async fn insert_if_absent(&self, id: &UserId) -> Result<User, RepositoryError>;
}
