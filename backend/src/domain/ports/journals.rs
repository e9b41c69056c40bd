//! Driving ports for journal use-cases.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{EntryFilter, EntryPatch, Error, Journal, JournalEntry, OrderClause, UserId};

/// Result of a `create_journal` call. Creation is lazy and idempotent:
/// when the user already owns a journal the existing row comes back
/// unchanged, flagged so the adapter can answer 200 instead of 201.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedJournal {
    pub journal: Journal,
    pub created: bool,
}

/// Mutating journal use-cases driven by inbound adapters.
#[async_trait]
pub trait JournalsCommand: Send + Sync {
    /// Create the caller's journal, recording the user first when absent.
    async fn create_journal(&self, user_id: UserId, title: String)
    -> Result<CreatedJournal, Error>;

    /// Create today's entry or merge into it when one already exists for
    /// the current UTC calendar date.
    async fn create_or_update_entry(
        &self,
        user_id: UserId,
        title: String,
        text: String,
    ) -> Result<JournalEntry, Error>;

    /// Explicitly edit an entry of the caller's journal.
    async fn update_entry(
        &self,
        user_id: UserId,
        entry_id: Uuid,
        patch: EntryPatch,
    ) -> Result<JournalEntry, Error>;
}

/// Read-only journal use-cases driven by inbound adapters.
#[async_trait]
pub trait JournalsQuery: Send + Sync {
    /// List the caller's entries with optional equality filters and the
    /// parsed ordering. Results are always scoped to the caller's own
    /// journal.
    async fn list_entries(
        &self,
        user_id: UserId,
        filter: EntryFilter,
        order_by: Vec<OrderClause>,
    ) -> Result<Vec<JournalEntry>, Error>;
}
