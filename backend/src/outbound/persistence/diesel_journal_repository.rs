//! PostgreSQL-backed `JournalRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Journal;
use crate::domain::UserId;
use crate::domain::ports::{JournalRepository, NewJournal, RepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{JournalRow, NewJournalRow};
use super::pool::DbPool;
use super::schema::journals;

#[derive(Clone)]
pub struct DieselJournalRepository {
    pool: DbPool,
}

impl DieselJournalRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JournalRepository for DieselJournalRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Journal>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<JournalRow> = journals::table
            .filter(journals::user_id.eq(user_id.as_ref()))
            .select(JournalRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(JournalRow::into_journal).transpose()
    }

    async fn insert(&self, journal: NewJournal) -> Result<Journal, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: JournalRow = diesel::insert_into(journals::table)
            .values(NewJournalRow {
                id: journal.id,
                user_id: journal.user_id.as_ref(),
                title: &journal.title,
            })
            .returning(JournalRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row.into_journal()
    }
}
