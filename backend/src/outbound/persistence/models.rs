//! Diesel row structs. Internal to the persistence layer; repositories
//! convert them to domain types before anything crosses a port.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{inspirations, journal_entries, journals, users};
use crate::domain::ports::RepositoryError;
use crate::domain::{Inspiration, Journal, JournalEntry, User, UserId};

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert to a domain user. A stored id that fails subject
    /// validation indicates store corruption and surfaces as a query
    /// error rather than a panic.
    pub fn into_user(self) -> Result<User, RepositoryError> {
        let id = UserId::new(self.id)
            .map_err(|err| RepositoryError::query(format!("malformed stored user id: {err}")))?;
        Ok(User {
            id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub id: &'a str,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = journals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct JournalRow {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JournalRow {
    pub fn into_journal(self) -> Result<Journal, RepositoryError> {
        let user_id = UserId::new(self.user_id)
            .map_err(|err| RepositoryError::query(format!("malformed stored user id: {err}")))?;
        Ok(Journal {
            id: self.id,
            user_id,
            title: self.title,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = journals)]
pub struct NewJournalRow<'a> {
    pub id: Uuid,
    pub user_id: &'a str,
    pub title: &'a str,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = journal_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EntryRow {
    pub id: Uuid,
    pub journal_id: Uuid,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EntryRow> for JournalEntry {
    fn from(row: EntryRow) -> Self {
        Self {
            id: row.id,
            journal_id: row.journal_id,
            title: row.title,
            text: row.text,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = journal_entries)]
pub struct NewEntryRow<'a> {
    pub id: Uuid,
    pub journal_id: Uuid,
    pub title: &'a str,
    pub text: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset shared by the upsert's merge arm and explicit edits. `None`
/// fields are left untouched.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = journal_entries)]
pub struct EntryChangeset<'a> {
    pub title: Option<&'a str>,
    pub text: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = inspirations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InspirationRow {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InspirationRow> for Inspiration {
    fn from(row: InspirationRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = inspirations)]
pub struct NewInspirationRow<'a> {
    pub id: Uuid,
    pub text: &'a str,
}
