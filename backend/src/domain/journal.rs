//! Journal aggregate: the per-user container for dated entries.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::UserId;

/// A user's journal. Exactly one exists per user; it is created lazily on
/// the first `create_journal` call and never deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Journal {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
