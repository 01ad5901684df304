use chrono::{DateTime, Utc};
use serde::Serialize;
use userdir_domain::User;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// API representation of a user record.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub display_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_i64(),
            display_name: user.display_name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
