//! Login verification

use std::sync::Arc;

use tracing::debug;

use super::verify_password;
use crate::domain::user::{PublicUser, UserRepository};
use crate::domain::AccountError;
use crate::infrastructure::user::PasswordHasher;

/// Verifies `(name, password)` pairs
///
/// An unknown name and a wrong password both yield `Unauthorized` so the
/// response cannot be used to enumerate names.
#[derive(Debug)]
pub struct AuthenticationService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> AuthenticationService<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    pub async fn authenticate(
        &self,
        name: &str,
        password: &str,
    ) -> Result<PublicUser, AccountError> {
        let Some(user) = self.repository.find_by_name(name).await? else {
            debug!(name = %name, "Login failed, unknown name");
            return Err(AccountError::Unauthorized);
        };

        if !verify_password(&self.hasher, password, user.password_hash()).await? {
            debug!(user_id = %user.id(), "Login failed, password mismatch");
            return Err(AccountError::Unauthorized);
        }

        debug!(user_id = %user.id(), "Login succeeded");
        Ok(user.to_public())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{MockUserRepository, User, UserId};
    use crate::infrastructure::user::{test_hasher, Argon2Hasher, InMemoryUserRepository};

    async fn create_service() -> AuthenticationService<InMemoryUserRepository, Argon2Hasher> {
        let hasher = test_hasher();
        let hash = hasher.hash("s3cret").unwrap();
        let user = User::new(UserId::new("user-1").unwrap(), "ada", "ada@x.io", hash);

        let repository = Arc::new(InMemoryUserRepository::with_users(vec![user]));
        AuthenticationService::new(repository, Arc::new(hasher))
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let service = create_service().await;

        let user = service.authenticate("ada", "s3cret").await.unwrap();

        assert_eq!(
            user,
            PublicUser {
                id: "user-1".to_string(),
                name: "ada".to_string(),
                email: "ada@x.io".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let service = create_service().await;

        let result = service.authenticate("ada", "wrong").await;
        assert_eq!(result, Err(AccountError::Unauthorized));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_name_matches_wrong_password() {
        let service = create_service().await;

        let unknown = service.authenticate("nobody", "s3cret").await;
        let wrong = service.authenticate("ada", "s3creT").await;

        assert_eq!(unknown, wrong);
    }

    #[tokio::test]
    async fn test_single_character_mutations_are_rejected() {
        let service = create_service().await;

        for mutated in ["S3cret", "s4cret", "s3cre", "s3crets", "x3cret", "s3cre7"] {
            let result = service.authenticate("ada", mutated).await;
            assert_eq!(result, Err(AccountError::Unauthorized), "{}", mutated);
        }
    }

    #[tokio::test]
    async fn test_authenticate_store_unavailable() {
        let repository = Arc::new(MockUserRepository::new());
        repository.set_should_fail(true).await;
        let service = AuthenticationService::new(repository, Arc::new(test_hasher()));

        let result = service.authenticate("ada", "s3cret").await;
        assert!(matches!(result, Err(AccountError::StoreUnavailable { .. })));
    }
}
