//! PostgreSQL-backed `EntryRepository`.
//!
//! Two statements carry the upsert engine's concurrency contract:
//!
//! - `find_id_on_date` matches `created_at` against the half-open UTC
//!   range `[day 00:00, day+1 00:00)`. A range comparison keeps the day
//!   boundary fixed at UTC regardless of the session `TimeZone` setting,
//!   which a `date(created_at)` cast would silently honour instead.
//! - `upsert` is a single `INSERT ... ON CONFLICT (id) DO UPDATE`, so
//!   concurrent same-day writers that picked the same id merge instead
//!   of failing or duplicating.
//!
//! Listing builds a boxed query: ordering columns come from the closed
//! [`EntryColumn`] enum, never from caller-supplied text.

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{EntryRepository, RepositoryError};
use crate::domain::{
    EntryColumn, EntryFilter, EntryPatch, EntrySort, EntryUpsert, JournalEntry, Ordering,
};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EntryChangeset, EntryRow, NewEntryRow};
use super::pool::DbPool;
use super::schema::journal_entries;

#[derive(Clone)]
pub struct DieselEntryRepository {
    pool: DbPool,
}

impl DieselEntryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn changeset_from_patch(patch: &EntryPatch, now: DateTime<Utc>) -> EntryChangeset<'_> {
    EntryChangeset {
        title: patch.title.as_deref(),
        text: patch.text.as_deref(),
        updated_at: now,
    }
}

/// Half-open UTC instant range covering one calendar day.
fn utc_day_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN));
    (start, start + Duration::days(1))
}

type BoxedEntriesQuery<'a> = journal_entries::BoxedQuery<'a, Pg>;

fn apply_order<'a>(
    query: BoxedEntriesQuery<'a>,
    sort: &EntrySort,
    first: bool,
) -> BoxedEntriesQuery<'a> {
    macro_rules! order_on {
        ($column:expr) => {
            match (first, sort.direction) {
                (true, Ordering::Asc) => query.order($column.asc()),
                (true, Ordering::Desc) => query.order($column.desc()),
                (false, Ordering::Asc) => query.then_order_by($column.asc()),
                (false, Ordering::Desc) => query.then_order_by($column.desc()),
            }
        };
    }

    match sort.column {
        EntryColumn::Id => order_on!(journal_entries::id),
        EntryColumn::JournalId => order_on!(journal_entries::journal_id),
        EntryColumn::Title => order_on!(journal_entries::title),
        EntryColumn::Text => order_on!(journal_entries::text),
        EntryColumn::CreatedAt => order_on!(journal_entries::created_at),
        EntryColumn::UpdatedAt => order_on!(journal_entries::updated_at),
    }
}

#[async_trait]
impl EntryRepository for DieselEntryRepository {
    async fn find_id_on_date(
        &self,
        journal_id: Uuid,
        day: NaiveDate,
    ) -> Result<Option<Uuid>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let (start, end) = utc_day_bounds(day);
        journal_entries::table
            .filter(journal_entries::journal_id.eq(journal_id))
            .filter(journal_entries::created_at.ge(start))
            .filter(journal_entries::created_at.lt(end))
            .select(journal_entries::id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)
    }

    async fn upsert(&self, entry: EntryUpsert) -> Result<JournalEntry, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let merge = EntryChangeset {
            title: Some(&entry.title),
            text: Some(&entry.text),
            updated_at: entry.now,
        };

        let row: EntryRow = diesel::insert_into(journal_entries::table)
            .values(NewEntryRow {
                id: entry.id,
                journal_id: entry.journal_id,
                title: &entry.title,
                text: &entry.text,
                created_at: entry.now,
                updated_at: entry.now,
            })
            .on_conflict(journal_entries::id)
            .do_update()
            .set(&merge)
            .returning(EntryRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_in_journal(
        &self,
        journal_id: Uuid,
        entry_id: Uuid,
    ) -> Result<Option<JournalEntry>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EntryRow> = journal_entries::table
            .filter(journal_entries::journal_id.eq(journal_id))
            .filter(journal_entries::id.eq(entry_id))
            .select(EntryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Into::into))
    }

    async fn update(
        &self,
        journal_id: Uuid,
        entry_id: Uuid,
        patch: EntryPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<JournalEntry>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = changeset_from_patch(&patch, now);
        let row: Option<EntryRow> = diesel::update(
            journal_entries::table
                .filter(journal_entries::journal_id.eq(journal_id))
                .filter(journal_entries::id.eq(entry_id)),
        )
        .set(&changeset)
        .returning(EntryRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;

        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        journal_id: Uuid,
        filter: &EntryFilter,
        order_by: &[EntrySort],
    ) -> Result<Vec<JournalEntry>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query: BoxedEntriesQuery<'_> = journal_entries::table
            .filter(journal_entries::journal_id.eq(journal_id))
            .into_boxed();

        if let Some(title) = filter.title.as_deref() {
            query = query.filter(journal_entries::title.eq(title));
        }
        if let Some(text) = filter.text.as_deref() {
            query = query.filter(journal_entries::text.eq(text));
        }
        for (index, sort) in order_by.iter().enumerate() {
            query = apply_order(query, sort, index == 0);
        }

        let rows: Vec<EntryRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
