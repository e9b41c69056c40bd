//! Inspiration prompts: an independent aggregate with plain CRUD.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A free-text inspiration prompt, readable and writable without auth.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspiration {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
