//! Deterministic in-memory collaborators for unit tests: a mutable clock
//! and store ports backed by `Mutex`-guarded vectors. The entry store
//! honours the same date-equality, filter, and ordering semantics the
//! Diesel adapters delegate to PostgreSQL, so service and handler tests
//! exercise realistic behaviour without I/O.

use std::cmp::Ordering as CmpOrdering;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{
    EntryRepository, InspirationRepository, JournalRepository, NewJournal, RepositoryError,
    UserRepository,
};
use crate::domain::{
    EntryColumn, EntryFilter, EntryPatch, EntrySort, EntryUpsert, Inspiration, Journal,
    JournalEntry, Ordering, User, UserId,
};

/// Clock whose current instant tests can set and advance.
pub struct MutableClock {
    now: Mutex<DateTime<Utc>>,
}

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("clock lock") = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("clock lock");
        *now += by;
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

/// In-memory `UserRepository`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn with_user(id: &UserId, at: DateTime<Utc>) -> Self {
        let repo = Self::default();
        repo.users.lock().expect("state lock").push(User {
            id: id.clone(),
            created_at: at,
            updated_at: at,
        });
        repo
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.users
            .lock()
            .expect("state lock")
            .iter()
            .any(|user| &user.id == id)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .expect("state lock")
            .iter()
            .find(|user| &user.id == id)
            .cloned())
    }

    async fn insert_if_absent(&self, id: &UserId) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().expect("state lock");
        if let Some(existing) = users.iter().find(|user| &user.id == id) {
            return Ok(existing.clone());
        }
        let now = Utc::now();
        let user = User {
            id: id.clone(),
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }
}

/// In-memory `JournalRepository`.
#[derive(Default)]
pub struct InMemoryJournalRepository {
    journals: Mutex<Vec<Journal>>,
}

impl InMemoryJournalRepository {
    pub fn with_journal(journal: Journal) -> Self {
        let repo = Self::default();
        repo.journals.lock().expect("state lock").push(journal);
        repo
    }
}

#[async_trait]
impl JournalRepository for InMemoryJournalRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Journal>, RepositoryError> {
        Ok(self
            .journals
            .lock()
            .expect("state lock")
            .iter()
            .find(|journal| &journal.user_id == user_id)
            .cloned())
    }

    async fn insert(&self, journal: NewJournal) -> Result<Journal, RepositoryError> {
        let now = Utc::now();
        let journal = Journal {
            id: journal.id,
            user_id: journal.user_id,
            title: journal.title,
            created_at: now,
            updated_at: now,
        };
        self.journals
            .lock()
            .expect("state lock")
            .push(journal.clone());
        Ok(journal)
    }
}

/// In-memory `EntryRepository` mirroring the store-side date comparison,
/// equality filters, and multi-column ordering.
#[derive(Default)]
pub struct InMemoryEntryRepository {
    entries: Mutex<Vec<JournalEntry>>,
}

impl InMemoryEntryRepository {
    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    pub fn snapshot(&self) -> Vec<JournalEntry> {
        self.entries.lock().expect("state lock").clone()
    }
}

fn compare_by(column: EntryColumn, a: &JournalEntry, b: &JournalEntry) -> CmpOrdering {
    match column {
        EntryColumn::Id => a.id.cmp(&b.id),
        EntryColumn::JournalId => a.journal_id.cmp(&b.journal_id),
        EntryColumn::Title => a.title.cmp(&b.title),
        EntryColumn::Text => a.text.cmp(&b.text),
        EntryColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        EntryColumn::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

fn compare_with(order_by: &[EntrySort], a: &JournalEntry, b: &JournalEntry) -> CmpOrdering {
    for sort in order_by {
        let ordering = match sort.direction {
            Ordering::Asc => compare_by(sort.column, a, b),
            Ordering::Desc => compare_by(sort.column, a, b).reverse(),
        };
        if ordering != CmpOrdering::Equal {
            return ordering;
        }
    }
    CmpOrdering::Equal
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn find_id_on_date(
        &self,
        journal_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<Uuid>, RepositoryError> {
        Ok(self
            .entries
            .lock()
            .expect("state lock")
            .iter()
            .find(|entry| entry.journal_id == journal_id && entry.entry_date() == date)
            .map(|entry| entry.id))
    }

    async fn upsert(&self, entry: EntryUpsert) -> Result<JournalEntry, RepositoryError> {
        let mut entries = self.entries.lock().expect("state lock");
        if let Some(existing) = entries.iter_mut().find(|row| row.id == entry.id) {
            existing.title = entry.title;
            existing.text = entry.text;
            existing.updated_at = entry.now;
            return Ok(existing.clone());
        }
        let row = JournalEntry {
            id: entry.id,
            journal_id: entry.journal_id,
            title: entry.title,
            text: entry.text,
            created_at: entry.now,
            updated_at: entry.now,
        };
        entries.push(row.clone());
        Ok(row)
    }

    async fn find_in_journal(
        &self,
        journal_id: Uuid,
        entry_id: Uuid,
    ) -> Result<Option<JournalEntry>, RepositoryError> {
        Ok(self
            .entries
            .lock()
            .expect("state lock")
            .iter()
            .find(|entry| entry.journal_id == journal_id && entry.id == entry_id)
            .cloned())
    }

    async fn update(
        &self,
        journal_id: Uuid,
        entry_id: Uuid,
        patch: EntryPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<JournalEntry>, RepositoryError> {
        let mut entries = self.entries.lock().expect("state lock");
        let Some(entry) = entries
            .iter_mut()
            .find(|entry| entry.journal_id == journal_id && entry.id == entry_id)
        else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            entry.title = title;
        }
        if let Some(text) = patch.text {
            entry.text = text;
        }
        entry.updated_at = now;
        Ok(Some(entry.clone()))
    }

    async fn list(
        &self,
        journal_id: Uuid,
        filter: &EntryFilter,
        order_by: &[EntrySort],
    ) -> Result<Vec<JournalEntry>, RepositoryError> {
        let mut rows: Vec<JournalEntry> = self
            .entries
            .lock()
            .expect("state lock")
            .iter()
            .filter(|entry| entry.journal_id == journal_id)
            .filter(|entry| {
                filter
                    .title
                    .as_ref()
                    .is_none_or(|title| &entry.title == title)
            })
            .filter(|entry| filter.text.as_ref().is_none_or(|text| &entry.text == text))
            .cloned()
            .collect();
        rows.sort_by(|a, b| compare_with(order_by, a, b));
        Ok(rows)
    }
}

/// In-memory `InspirationRepository`.
#[derive(Default)]
pub struct InMemoryInspirationRepository {
    inspirations: Mutex<Vec<Inspiration>>,
}

#[async_trait]
impl InspirationRepository for InMemoryInspirationRepository {
    async fn insert(&self, id: Uuid, text: String) -> Result<Inspiration, RepositoryError> {
        let now = Utc::now();
        let inspiration = Inspiration {
            id,
            text,
            created_at: now,
            updated_at: now,
        };
        self.inspirations
            .lock()
            .expect("state lock")
            .push(inspiration.clone());
        Ok(inspiration)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Inspiration>, RepositoryError> {
        Ok(self
            .inspirations
            .lock()
            .expect("state lock")
            .iter()
            .find(|inspiration| inspiration.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Inspiration>, RepositoryError> {
        Ok(self.inspirations.lock().expect("state lock").clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut inspirations = self.inspirations.lock().expect("state lock");
        let before = inspirations.len();
        inspirations.retain(|inspiration| inspiration.id != id);
        Ok(inspirations.len() != before)
    }
}
