//! New account registration

use std::sync::Arc;

use tracing::{info, warn};

use super::hash_password;
use crate::domain::user::{
    validate_email, validate_name, validate_password, PublicUser, User, UserId, UserRepository,
};
use crate::domain::{AccountError, DomainError};
use crate::infrastructure::user::PasswordHasher;

/// Request for creating a new account
#[derive(Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub password: String,
    pub email: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .finish()
    }
}

/// Creates identities with a unique name
///
/// The name pre-check only produces the common-case error early. Concurrent
/// registrations can both pass it; the repository's uniqueness constraint
/// rejects the loser and that rejection is reported as `DuplicateName` too.
#[derive(Debug)]
pub struct RegistrationService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> RegistrationService<R, H>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
{
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<PublicUser, AccountError> {
        validate_name(&request.name)?;
        validate_email(&request.email)?;
        validate_password(&request.password)?;

        let password_hash = hash_password(&self.hasher, &request.password).await?;

        if self.repository.name_exists(&request.name).await? {
            info!(name = %request.name, "Registration rejected, name already taken");
            return Err(AccountError::duplicate_name(&request.name));
        }

        let user = User::new(
            UserId::generate(),
            &request.name,
            &request.email,
            password_hash,
        );

        match self.repository.insert(user).await {
            Ok(user) => {
                info!(user_id = %user.id(), name = %user.name(), "User registered");
                Ok(user.to_public())
            }
            Err(DomainError::Conflict { message }) => {
                warn!(name = %request.name, reason = %message, "Registration lost a uniqueness race");
                Err(AccountError::duplicate_name(&request.name))
            }
            Err(e) => Err(e.into()),
        }
    }
}
