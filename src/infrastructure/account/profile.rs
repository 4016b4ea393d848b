//! Profile update

use std::sync::Arc;

use tracing::info;

use super::{hash_password, parse_user_id};
use crate::domain::user::{validate_email, validate_name, PublicUser, UserChanges, UserRepository};
use crate::domain::{AccountError, DomainError};
use crate::infrastructure::user::PasswordHasher;

/// Request for changing a user's profile
///
/// An absent or empty `password` keeps the stored hash.
#[derive(Clone, Default)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

impl UpdateProfileRequest {
    fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

impl std::fmt::Debug for UpdateProfileRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateProfileRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Rewrites name and email, and the password hash when a new password is given
///
/// The name is not pre-checked for uniqueness; a rename onto a taken name is
/// caught by the repository constraint and reported as `DuplicateName`.
#[derive(Debug)]
pub struct ProfileUpdateService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> ProfileUpdateService<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateProfileRequest,
    ) -> Result<PublicUser, AccountError> {
        let user_id = parse_user_id(id)?;

        validate_name(&request.name)?;
        validate_email(&request.email)?;

        let password_hash = match request.new_password() {
            Some(password) => Some(hash_password(&self.hasher, password).await?),
            None => None,
        };
        let password_changed = password_hash.is_some();

        let changes = UserChanges {
            name: request.name,
            email: request.email,
            password_hash,
        };

        match self.repository.update(&user_id, &changes).await {
            Ok(true) => {}
            Ok(false) => return Err(AccountError::not_found(id)),
            Err(DomainError::Conflict { .. }) => {
                return Err(AccountError::duplicate_name(&changes.name));
            }
            Err(e) => return Err(e.into()),
        }

        info!(user_id = %user_id, password_changed, "User profile updated");

        // A concurrent delete can remove the row between the two statements
        let user = self
            .repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AccountError::not_found(id))?;

        Ok(user.to_public())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{MockUserRepository, User, UserId};
    use crate::infrastructure::user::{test_hasher, Argon2Hasher, InMemoryUserRepository};

    struct Fixture {
        service: ProfileUpdateService<InMemoryUserRepository, Argon2Hasher>,
        repository: Arc<InMemoryUserRepository>,
        hasher: Arc<Argon2Hasher>,
    }

    fn fixture() -> Fixture {
        let hasher = Arc::new(test_hasher());
        let ada = User::new(
            UserId::new("user-1").unwrap(),
            "ada",
            "ada@x.io",
            hasher.hash("old-password").unwrap(),
        );
        let grace = User::new(
            UserId::new("user-2").unwrap(),
            "grace",
            "grace@x.io",
            hasher.hash("grace-password").unwrap(),
        );

        let repository = Arc::new(InMemoryUserRepository::with_users(vec![ada, grace]));
        let service = ProfileUpdateService::new(repository.clone(), hasher.clone());

        Fixture {
            service,
            repository,
            hasher,
        }
    }

    fn request(name: &str, email: &str, password: Option<&str>) -> UpdateProfileRequest {
        UpdateProfileRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.map(str::to_string),
        }
    }

    async fn stored_hash(fixture: &Fixture) -> String {
        let id = UserId::new("user-1").unwrap();
        let user = fixture.repository.find_by_id(&id).await.unwrap().unwrap();
        user.password_hash().to_string()
    }

    #[tokio::test]
    async fn test_update_without_password_keeps_hash() {
        let fixture = fixture();
        let before = stored_hash(&fixture).await;

        let user = fixture
            .service
            .update("user-1", request("lovelace", "lovelace@x.io", None))
            .await
            .unwrap();

        assert_eq!(user.id, "user-1");
        assert_eq!(user.name, "lovelace");
        assert_eq!(user.email, "lovelace@x.io");
        assert_eq!(stored_hash(&fixture).await, before);
    }

    #[tokio::test]
    async fn test_update_with_empty_password_keeps_hash() {
        let fixture = fixture();
        let before = stored_hash(&fixture).await;

        fixture
            .service
            .update("user-1", request("ada", "ada@x.io", Some("")))
            .await
            .unwrap();

        assert_eq!(stored_hash(&fixture).await, before);
    }

    #[tokio::test]
    async fn test_update_with_password_rehashes() {
        let fixture = fixture();
        let before = stored_hash(&fixture).await;

        fixture
            .service
            .update("user-1", request("ada", "ada@x.io", Some("new-password")))
            .await
            .unwrap();

        let after = stored_hash(&fixture).await;
        assert_ne!(after, before);
        assert!(fixture.hasher.verify("new-password", &after));
        assert!(!fixture.hasher.verify("old-password", &after));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let fixture = fixture();

        let result = fixture
            .service
            .update("missing", request("ada", "ada@x.io", None))
            .await;

        assert_eq!(result, Err(AccountError::not_found("missing")));
    }

    #[tokio::test]
    async fn test_rename_onto_taken_name() {
        let fixture = fixture();

        let result = fixture
            .service
            .update("user-1", request("grace", "ada@x.io", None))
            .await;

        assert_eq!(result, Err(AccountError::duplicate_name("grace")));
    }

    #[tokio::test]
    async fn test_update_rejects_empty_name() {
        let fixture = fixture();

        let result = fixture
            .service
            .update("user-1", request("", "ada@x.io", None))
            .await;

        assert!(matches!(result, Err(AccountError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_store_unavailable() {
        let repository = Arc::new(MockUserRepository::new());
        repository.set_should_fail(true).await;
        let service = ProfileUpdateService::new(repository, Arc::new(test_hasher()));

        let result = service
            .update("user-1", request("ada", "ada@x.io", None))
            .await;

        assert!(matches!(result, Err(AccountError::StoreUnavailable { .. })));
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let debug = format!("{:?}", request("ada", "a@x.io", Some("hunter2")));
        assert!(!debug.contains("hunter2"));
    }
}
