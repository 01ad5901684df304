//! User directory port and application service.
//!
//! Owns the two read operations of the directory: listing every user and
//! resolving a single user by identifier. An absent identifier is surfaced
//! as a named `NotFound` error, never as an empty value.

use std::sync::Arc;

use async_trait::async_trait;

use userdir_core::{AppError, AppResult};
use userdir_domain::{User, UserId};


// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Repository port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every user record the store holds, in store order.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Finds a user by their unique identifier.
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Application service for user directory lookups.
///
/// Stateless pass-through over the repository port: repository failures
/// propagate unchanged, and no result is reordered, filtered, or cached.
#[derive(Clone)]
pub struct UserDirectoryService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserDirectoryService {
    /// Creates a new directory service over the given repository.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Returns every user currently known to the repository.
    pub async fn all_users(&self) -> AppResult<Vec<User>> {
        self.user_repository.find_all().await
    }

    /// Returns the user with the given identifier.
    ///
    /// Fails with [`AppError::NotFound`] naming the identifier when no such
    /// user exists. Callers must treat absence as exceptional, not as a
    /// valid empty state.
    pub async fn user_by_id(&self, user_id: UserId) -> AppResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no user with id {user_id}")))
    }
}
