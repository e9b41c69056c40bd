//! Driven port for journal entry persistence.
//!
//! The port shapes the concurrency contract of the upsert engine:
//! [`EntryRepository::find_id_on_date`] is an advisory read that only
//! chooses the conflict key, and [`EntryRepository::upsert`] must execute
//! as one indivisible insert-or-merge statement keyed on the primary key.
//! Implementations must not split that write into a separately committed
//! check-then-write pair.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::ports::RepositoryError;
use crate::domain::{EntryFilter, EntryPatch, EntrySort, EntryUpsert, JournalEntry};

/// Store operations on the journal_entries table.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Return the id of the entry whose `created_at` calendar date equals
    /// `date` within the given journal, if one exists. Date-level
    /// equality, not timestamp equality.
    async fn find_id_on_date(
        &self,
        journal_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<Uuid>, RepositoryError>;

    /// Atomically insert the entry or, when a row with the same id
    /// already exists, merge `title`, `text`, and `updated_at` into it.
    /// Returns the resulting row.
    async fn upsert(&self, entry: EntryUpsert) -> Result<JournalEntry, RepositoryError>;

    /// Fetch an entry by id, scoped to the given journal.
    async fn find_in_journal(
        &self,
        journal_id: Uuid,
        entry_id: Uuid,
    ) -> Result<Option<JournalEntry>, RepositoryError>;

    /// Apply a non-empty patch to an entry within the journal, refreshing
    /// `updated_at`. Returns `None` when the row no longer exists.
    async fn update(
        &self,
        journal_id: Uuid,
        entry_id: Uuid,
        patch: EntryPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<JournalEntry>, RepositoryError>;

    /// List the journal's entries matching the filter, ordered by the
    /// given terms (store natural order when empty). The journal scope is
    /// always applied server-side.
    async fn list(
        &self,
        journal_id: Uuid,
        filter: &EntryFilter,
        order_by: &[EntrySort],
    ) -> Result<Vec<JournalEntry>, RepositoryError>;
}
