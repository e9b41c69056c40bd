//! Journal entry aggregate and the value objects consumed by the entry
//! upsert engine.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// One dated note in a journal. At most one exists per calendar day per
/// journal; the upsert engine merges same-day writes into the existing
/// row instead of inserting a second one.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub id: Uuid,
    pub journal_id: Uuid,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Calendar date this entry belongs to, on the UTC basis used by the
    /// upsert engine's day-boundary comparison.
    pub fn entry_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// Write payload for the atomic insert-or-merge statement.
///
/// `id` is either the advisory pre-fetched id of today's row (merge) or a
/// freshly generated one (insert); correctness under concurrent writers
/// is delegated to the store's conflict resolution on the primary key.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryUpsert {
    pub id: Uuid,
    pub journal_id: Uuid,
    pub title: String,
    pub text: String,
    pub now: DateTime<Utc>,
}

/// Partial update for an explicit entry edit. Absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub text: Option<String>,
}

impl EntryPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none()
    }
}

/// Optional exact-match predicates for entry listings, AND-combined. The
/// journal scope is not part of the filter; services always apply it
/// server-side from the resolved journal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    pub title: Option<String>,
    pub text: Option<String>,
}
