//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserChanges, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct UserTable {
    users: HashMap<String, User>,
    /// name -> user ID, the uniqueness constraint
    name_index: HashMap<String, String>,
}

/// In-memory implementation of UserRepository
///
/// Rows and the name index sit behind one lock so every statement is atomic,
/// like a single SQL statement against a table with a unique index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    ///
    /// Later entries with an already used name are dropped.
    pub fn with_users(users: Vec<User>) -> Self {
        let mut table = UserTable::default();

        for user in users {
            let id = user.id().as_str().to_string();
            let name = user.name().to_string();

            if table.name_index.contains_key(&name) {
                continue;
            }

            table.name_index.insert(name, id.clone());
            table.users.insert(id, user);
        }

        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.table.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.get(id.as_str()).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;

        Ok(table
            .name_index
            .get(name)
            .and_then(|id| table.users.get(id))
            .cloned())
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        let id = user.id().as_str().to_string();
        let name = user.name().to_string();

        if table.users.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "User with ID '{}' already exists",
                id
            )));
        }

        if table.name_index.contains_key(&name) {
            return Err(DomainError::conflict(format!(
                "Name '{}' already exists",
                name
            )));
        }

        table.name_index.insert(name, id.clone());
        table.users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: &UserId, changes: &UserChanges) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;

        let old_name = match table.users.get(id.as_str()) {
            Some(user) => user.name().to_string(),
            None => return Ok(false),
        };

        // If the name changed, check uniqueness and move the index entry
        if old_name != changes.name {
            if table.name_index.contains_key(&changes.name) {
                return Err(DomainError::conflict(format!(
                    "Name '{}' already exists",
                    changes.name
                )));
            }

            table.name_index.remove(&old_name);
            table
                .name_index
                .insert(changes.name.clone(), id.as_str().to_string());
        }

        if let Some(user) = table.users.get_mut(id.as_str()) {
            user.set_name(&changes.name);
            user.set_email(&changes.email);

            if let Some(hash) = &changes.password_hash {
                user.set_password_hash(hash);
            }
        }

        Ok(true)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;

        if let Some(user) = table.users.remove(id.as_str()) {
            table.name_index.remove(user.name());
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: &str, name: &str) -> User {
        let user_id = UserId::new(id).unwrap();
        User::new(user_id, name, format!("{}@x.io", name), "hashed_password")
    }

    fn changes(name: &str, email: &str, password_hash: Option<&str>) -> UserChanges {
        UserChanges {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "ada");

        repo.insert(user.clone()).await.unwrap();

        let retrieved = repo.find_by_id(user.id()).await.unwrap();
        assert_eq!(retrieved.unwrap().name(), "ada");
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let repo = InMemoryUserRepository::new();
        repo.insert(create_test_user("user-1", "ada")).await.unwrap();

        let retrieved = repo.find_by_name("ada").await.unwrap();
        assert_eq!(retrieved.unwrap().id().as_str(), "user-1");

        let not_found = repo.find_by_name("nonexistent").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id() {
        let repo = InMemoryUserRepository::new();

        repo.insert(create_test_user("user-1", "ada")).await.unwrap();

        let result = repo.insert(create_test_user("user-1", "grace")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_name() {
        let repo = InMemoryUserRepository::new();

        repo.insert(create_test_user("user-1", "ada")).await.unwrap();

        let result = repo.insert(create_test_user("user-2", "ada")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_with_same_name() {
        let repo = InMemoryUserRepository::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert(create_test_user(&format!("user-{}", i), "ada"))
                        .await
                })
            })
            .collect();

        let mut successes = 0;

        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_keeps_hash_when_absent() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "ada");
        repo.insert(user.clone()).await.unwrap();

        let updated = repo
            .update(user.id(), &changes("lovelace", "l@x.io", None))
            .await
            .unwrap();
        assert!(updated);

        let retrieved = repo.find_by_id(user.id()).await.unwrap().unwrap();
        assert_eq!(retrieved.name(), "lovelace");
        assert_eq!(retrieved.email(), "l@x.io");
        assert_eq!(retrieved.password_hash(), "hashed_password");

        // Old name should not be found, new name should
        assert!(repo.find_by_name("ada").await.unwrap().is_none());
        assert!(repo.find_by_name("lovelace").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_replaces_hash() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "ada");
        repo.insert(user.clone()).await.unwrap();

        repo.update(user.id(), &changes("ada", "ada@x.io", Some("new_hash")))
            .await
            .unwrap();

        let retrieved = repo.find_by_id(user.id()).await.unwrap().unwrap();
        assert_eq!(retrieved.password_hash(), "new_hash");
    }

    #[tokio::test]
    async fn test_update_name_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.insert(create_test_user("user-1", "ada")).await.unwrap();
        let grace = create_test_user("user-2", "grace");
        repo.insert(grace.clone()).await.unwrap();

        let result = repo
            .update(grace.id(), &changes("ada", "g@x.io", None))
            .await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));

        let unchanged = repo.find_by_id(grace.id()).await.unwrap().unwrap();
        assert_eq!(unchanged.name(), "grace");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::new("missing").unwrap();

        let updated = repo.update(&id, &changes("ada", "a@x.io", None)).await.unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user-1", "ada");

        repo.insert(user.clone()).await.unwrap();

        assert!(repo.delete(user.id()).await.unwrap());
        assert!(!repo.delete(user.id()).await.unwrap());

        assert!(repo.find_by_id(user.id()).await.unwrap().is_none());

        // Name should also be released
        assert!(repo.find_by_name("ada").await.unwrap().is_none());
        repo.insert(create_test_user("user-2", "ada")).await.unwrap();
    }

    #[tokio::test]
    async fn test_with_users() {
        let repo = InMemoryUserRepository::with_users(vec![
            create_test_user("user-1", "ada"),
            create_test_user("user-2", "grace"),
            create_test_user("user-3", "ada"),
        ]);

        assert_eq!(repo.len().await, 2);
        assert!(repo.find_by_name("grace").await.unwrap().is_some());
    }
}
