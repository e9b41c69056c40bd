//! User identity model.
//!
//! Users are keyed by the opaque subject identifier supplied by the token
//! verifier (for example an OIDC `sub` claim). The backend never mints
//! user ids of its own; it only records subjects lazily when they create
//! their journal.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserIdValidationError {
    #[error("user id must not be empty")]
    Empty,
    #[error("user id must not contain surrounding whitespace")]
    SurroundingWhitespace,
}

/// Opaque, externally supplied user identifier.
///
/// ## Invariants
/// - Non-empty and free of surrounding whitespace. No other structure is
///   assumed; auth providers use formats such as `auth0|abc123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, UserIdValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserIdValidationError::Empty);
        }
        if id.trim() != id {
            return Err(UserIdValidationError::SurroundingWhitespace);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A recorded user row.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("auth0|abc123")]
    #[case("user-42")]
    fn accepts_opaque_subjects(#[case] raw: &str) {
        let id = UserId::new(raw).expect("valid subject");
        assert_eq!(id.as_ref(), raw);
    }

    #[rstest]
    #[case("", UserIdValidationError::Empty)]
    #[case(" padded ", UserIdValidationError::SurroundingWhitespace)]
    fn rejects_malformed_subjects(#[case] raw: &str, #[case] expected: UserIdValidationError) {
        assert_eq!(UserId::new(raw), Err(expected));
    }
}
