//! In-memory user repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use userdir_application::UserRepository;
use userdir_core::AppResult;
use userdir_domain::{User, UserId};

#[cfg(test)]
mod tests;

#[derive(Debug, Default)]
struct StoreState {
    next_id: i64,
    users: HashMap<i64, User>,
}

/// In-memory user repository, for development and tests.
///
/// Assigns identifiers from a monotonic counter, mirroring what the
/// database sequence does for the Postgres adapter.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: RwLock<StoreState>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Inserts a new user and returns the stored record with its assigned id.
    pub async fn insert(&self, display_name: &str, email: &str) -> AppResult<User> {
        let mut state = self.state.write().await;

        state.next_id += 1;
        let user = User {
            id: UserId::from_i64(state.next_id),
            display_name: display_name.to_owned(),
            email: email.to_owned(),
            created_at: Utc::now(),
        };
        state.users.insert(user.id.as_i64(), user.clone());

        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let state = self.state.read().await;

        let mut values: Vec<User> = state.users.values().cloned().collect();
        values.sort_by_key(|user| user.id);

        Ok(values)
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self
            .state
            .read()
            .await
            .users
            .get(&user_id.as_i64())
            .cloned())
    }
}
