//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Mutable fields written by a profile update
///
/// `password_hash` is `None` when the stored hash must stay untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
}

impl Debug for UserChanges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserChanges")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &self.password_hash.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Repository trait for the `users` relation
///
/// Implementations must enforce name uniqueness themselves: a second row with
/// an existing name is rejected with [`DomainError::Conflict`], on insert and
/// on update alike.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by their name (for login and the registration pre-check)
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// Apply profile changes; returns `false` when no row has this ID
    async fn update(&self, id: &UserId, changes: &UserChanges) -> Result<bool, DomainError>;

    /// Delete a user; returns `false` when no row has this ID
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Check if a name is taken
    async fn name_exists(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_name(name).await?.is_some())
    }

    /// Round-trip to the backing store, used by readiness checks
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
