//! User entity and identifier types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a user record.
///
/// Assigned by the persistence layer (a `BIGSERIAL` column in Postgres,
/// a monotonic counter in the in-memory store); never minted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    /// Creates a user identifier from a raw store-assigned value.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A user record as held by the persistence layer.
///
/// The directory service only reads these; it never mutates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned unique identifier.
    pub id: UserId,
    /// Name shown in listings.
    pub display_name: String,
    /// Contact email address.
    pub email: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
