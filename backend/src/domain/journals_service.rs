//! Journal domain services: the entry upsert engine, the entry query
//! service, and the user/journal existence guards in front of both.
//!
//! ## Day-boundary contract
//!
//! "Today's entry" is decided by calendar-date equality on a **UTC**
//! basis: the engine derives the date as `clock.utc().date_naive()` and
//! the store compares only the date component of `created_at`. The
//! timezone basis is deliberately fixed rather than inherited from any
//! driver or session setting.
//!
//! ## Concurrency contract
//!
//! The find-then-write pair in [`JournalsService::create_or_update_entry`]
//! is safe without client-side locking because the read is advisory: it
//! only picks the conflict key. The write itself is a single atomic
//! insert-or-merge on the primary key, so concurrent same-day callers
//! that observed the same candidate id converge onto one row.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{
    CreatedJournal, EntryRepository, JournalRepository, JournalsCommand, JournalsQuery,
    NewJournal, RepositoryError, UserRepository,
};
use crate::domain::{
    EntryFilter, EntryPatch, EntrySort, EntryUpsert, Error, Journal, JournalEntry, OrderClause,
    User, UserId,
};

/// Journal use-case implementation backed by store ports and a clock.
#[derive(Clone)]
pub struct JournalsService<U, J, E> {
    users: Arc<U>,
    journals: Arc<J>,
    entries: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<U, J, E> JournalsService<U, J, E> {
    /// Create a new service with the given repositories and clock.
    pub fn new(users: Arc<U>, journals: Arc<J>, entries: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            journals,
            entries,
            clock,
        }
    }
}

fn map_repository_error(error: RepositoryError) -> Error {
    // Adapters redact internal messages before they reach a client; the
    // full store failure is kept for the server-side log line.
    Error::internal(error.to_string())
}

impl<U, J, E> JournalsService<U, J, E>
where
    U: UserRepository,
    J: JournalRepository,
    E: EntryRepository,
{
    /// Existence guard: the user row for the authenticated subject.
    async fn resolve_user(&self, user_id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("User {user_id} not found")))
    }

    /// Existence guard: the journal owned by the authenticated subject.
    async fn resolve_journal(&self, user_id: &UserId) -> Result<Journal, Error> {
        self.journals
            .find_by_user(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("Journal for user {user_id} not found")))
    }
}

#[async_trait]
impl<U, J, E> JournalsCommand for JournalsService<U, J, E>
where
    U: UserRepository,
    J: JournalRepository,
    E: EntryRepository,
{
    async fn create_journal(
        &self,
        user_id: UserId,
        title: String,
    ) -> Result<CreatedJournal, Error> {
        // Two explicit idempotent steps rather than an implicit side
        // effect: ensure the user row, then ensure the journal.
        let user = match self
            .users
            .find_by_id(&user_id)
            .await
            .map_err(map_repository_error)?
        {
            Some(user) => user,
            None => self
                .users
                .insert_if_absent(&user_id)
                .await
                .map_err(map_repository_error)?,
        };

        if let Some(journal) = self
            .journals
            .find_by_user(&user.id)
            .await
            .map_err(map_repository_error)?
        {
            return Ok(CreatedJournal {
                journal,
                created: false,
            });
        }

        let journal = self
            .journals
            .insert(NewJournal {
                id: Uuid::new_v4(),
                user_id: user.id,
                title,
            })
            .await
            .map_err(map_repository_error)?;

        Ok(CreatedJournal {
            journal,
            created: true,
        })
    }

    async fn create_or_update_entry(
        &self,
        user_id: UserId,
        title: String,
        text: String,
    ) -> Result<JournalEntry, Error> {
        self.resolve_user(&user_id).await?;
        let journal = self.resolve_journal(&user_id).await?;

        let now = self.clock.utc();
        let today = now.date_naive();

        // Advisory read: choose the conflict key. Losing a race here is
        // fine; the upsert below resolves it on the primary key.
        let candidate = self
            .entries
            .find_id_on_date(journal.id, today)
            .await
            .map_err(map_repository_error)?;

        let entry = EntryUpsert {
            id: candidate.unwrap_or_else(Uuid::new_v4),
            journal_id: journal.id,
            title,
            text,
            now,
        };

        self.entries
            .upsert(entry)
            .await
            .map_err(map_repository_error)
    }

    async fn update_entry(
        &self,
        user_id: UserId,
        entry_id: Uuid,
        patch: EntryPatch,
    ) -> Result<JournalEntry, Error> {
        self.resolve_user(&user_id).await?;
        let journal = self.resolve_journal(&user_id).await?;

        let entry = self
            .entries
            .find_in_journal(journal.id, entry_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("Journal entry {entry_id} not found")))?;

        if patch.is_empty() {
            return Ok(entry);
        }

        self.entries
            .update(journal.id, entry_id, patch, self.clock.utc())
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("Journal entry {entry_id} not found")))
    }
}

#[async_trait]
impl<U, J, E> JournalsQuery for JournalsService<U, J, E>
where
    U: UserRepository,
    J: JournalRepository,
    E: EntryRepository,
{
    async fn list_entries(
        &self,
        user_id: UserId,
        filter: EntryFilter,
        order_by: Vec<OrderClause>,
    ) -> Result<Vec<JournalEntry>, Error> {
        self.resolve_user(&user_id).await?;
        let journal = self.resolve_journal(&user_id).await?;

        let order_by = order_by
            .iter()
            .map(|clause| {
                EntrySort::try_from(clause)
                    .map_err(|err| Error::invalid_request(format!("Invalid orderBy: {err}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // The journal scope comes from the resolved journal, never from
        // the caller's filter, so one user cannot list another's entries.
        self.entries
            .list(journal.id, &filter, &order_by)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "journals_service_tests.rs"]
mod tests;
