//! PostgreSQL-backed `InspirationRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::Inspiration;
use crate::domain::ports::{InspirationRepository, RepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{InspirationRow, NewInspirationRow};
use super::pool::DbPool;
use super::schema::inspirations;

#[derive(Clone)]
pub struct DieselInspirationRepository {
    pool: DbPool,
}

impl DieselInspirationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InspirationRepository for DieselInspirationRepository {
    async fn insert(&self, id: Uuid, text: String) -> Result<Inspiration, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: InspirationRow = diesel::insert_into(inspirations::table)
            .values(NewInspirationRow { id, text: &text })
            .returning(InspirationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Inspiration>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<InspirationRow> = inspirations::table
            .find(id)
            .select(InspirationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Inspiration>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<InspirationRow> = inspirations::table
            .select(InspirationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(inspirations::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
