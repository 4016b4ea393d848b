//! Account lifecycle use cases
//!
//! Registration, authentication, profile update and the cross-system account
//! deletion, plus the [`AccountService`] facade the HTTP layer talks to.

mod authentication;
mod deletion;
mod profile;
mod registration;
mod service;

pub use authentication::AuthenticationService;
pub use deletion::AccountDeletionOrchestrator;
pub use profile::{ProfileUpdateService, UpdateProfileRequest};
pub use registration::{RegisterRequest, RegistrationService};
pub use service::AccountService;

use std::sync::Arc;

use crate::domain::user::UserId;
use crate::domain::{AccountError, DomainError};
use crate::infrastructure::user::PasswordHasher;

/// Parse a caller-supplied ID; an ID that cannot exist is reported as missing
fn parse_user_id(id: &str) -> Result<UserId, AccountError> {
    UserId::new(id).map_err(|_| AccountError::not_found(id))
}

/// Hash on the blocking pool so key derivation does not stall async workers
async fn hash_password<H>(hasher: &Arc<H>, password: &str) -> Result<String, AccountError>
where
    H: PasswordHasher + 'static,
{
    let hasher = Arc::clone(hasher);
    let password = password.to_string();

    let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))??;

    Ok(hash)
}

async fn verify_password<H>(
    hasher: &Arc<H>,
    password: &str,
    hash: &str,
) -> Result<bool, AccountError>
where
    H: PasswordHasher + 'static,
{
    let hasher = Arc::clone(hasher);
    let password = password.to_string();
    let hash = hash.to_string();

    let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))?;

    Ok(verified)
}
