//! Driving ports for inspiration use-cases.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, Inspiration};

/// Mutating inspiration use-cases.
#[async_trait]
pub trait InspirationsCommand: Send + Sync {
    /// Record a new inspiration prompt.
    async fn create_inspiration(&self, text: String) -> Result<Inspiration, Error>;

    /// Remove an inspiration; NotFound when it does not exist.
    async fn delete_inspiration(&self, id: Uuid) -> Result<(), Error>;
}

/// Read-only inspiration use-cases.
#[async_trait]
pub trait InspirationsQuery: Send + Sync {
    /// List every inspiration prompt.
    async fn list_inspirations(&self) -> Result<Vec<Inspiration>, Error>;
}
