//! Inspiration use-case implementation: plain CRUD over the repository
//! port, with a NotFound guard in front of deletion.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    InspirationRepository, InspirationsCommand, InspirationsQuery, RepositoryError,
};
use crate::domain::{Error, Inspiration};

/// Inspiration service backed by a store port.
#[derive(Clone)]
pub struct InspirationsService<R> {
    inspirations: Arc<R>,
}

impl<R> InspirationsService<R> {
    /// Create a new service with the given repository.
    pub fn new(inspirations: Arc<R>) -> Self {
        Self { inspirations }
    }
}

fn map_repository_error(error: RepositoryError) -> Error {
    Error::internal(error.to_string())
}

#[async_trait]
impl<R> InspirationsCommand for InspirationsService<R>
where
    R: InspirationRepository,
{
    async fn create_inspiration(&self, text: String) -> Result<Inspiration, Error> {
        self.inspirations
            .insert(Uuid::new_v4(), text)
            .await
            .map_err(map_repository_error)
    }

    async fn delete_inspiration(&self, id: Uuid) -> Result<(), Error> {
        self.inspirations
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("Inspiration id {id} not found")))?;

        self.inspirations
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        Ok(())
    }
}

#[async_trait]
impl<R> InspirationsQuery for InspirationsService<R>
where
    R: InspirationRepository,
{
    async fn list_inspirations(&self) -> Result<Vec<Inspiration>, Error> {
        self.inspirations
            .list()
            .await
            .map_err(map_repository_error)
    }
}
