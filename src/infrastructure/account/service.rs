//! Facade bundling the account use cases over one set of dependencies

use std::sync::Arc;

use super::{
    parse_user_id, AccountDeletionOrchestrator, AuthenticationService, ProfileUpdateService,
    RegisterRequest, RegistrationService, UpdateProfileRequest,
};
use crate::domain::media::{MediaAssetRepository, MediaStorageClient};
use crate::domain::user::{PublicUser, UserRepository};
use crate::domain::{AccountError, DeletionOutcome};
use crate::infrastructure::user::PasswordHasher;

#[derive(Debug)]
pub struct AccountService<U, M, H, C>
where
    U: UserRepository,
    M: MediaAssetRepository,
    H: PasswordHasher,
    C: MediaStorageClient,
{
    users: Arc<U>,
    registration: RegistrationService<U, H>,
    authentication: AuthenticationService<U, H>,
    profile: ProfileUpdateService<U, H>,
    deletion: AccountDeletionOrchestrator<U, M, C>,
}

impl<U, M, H, C> AccountService<U, M, H, C>
where
    U: UserRepository,
    M: MediaAssetRepository,
    H: PasswordHasher + 'static,
    C: MediaStorageClient,
{
    pub fn new(users: Arc<U>, media: Arc<M>, hasher: Arc<H>, client: Arc<C>) -> Self {
        Self {
            registration: RegistrationService::new(users.clone(), hasher.clone()),
            authentication: AuthenticationService::new(users.clone(), hasher.clone()),
            profile: ProfileUpdateService::new(users.clone(), hasher),
            deletion: AccountDeletionOrchestrator::new(users.clone(), media, client),
            users,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<PublicUser, AccountError> {
        self.registration.register(request).await
    }

    pub async fn authenticate(
        &self,
        name: &str,
        password: &str,
    ) -> Result<PublicUser, AccountError> {
        self.authentication.authenticate(name, password).await
    }

    pub async fn update_profile(
        &self,
        id: &str,
        request: UpdateProfileRequest,
    ) -> Result<PublicUser, AccountError> {
        self.profile.update(id, request).await
    }

    pub async fn delete(&self, id: &str) -> Result<DeletionOutcome, AccountError> {
        self.deletion.delete(id).await
    }

    pub async fn find_public(&self, id: &str) -> Result<PublicUser, AccountError> {
        let user_id = parse_user_id(id)?;

        self.users
            .find_by_id(&user_id)
            .await?
            .map(|user| user.to_public())
            .ok_or_else(|| AccountError::not_found(id))
    }

    /// Round-trip to the user store
    pub async fn ping(&self) -> Result<(), AccountError> {
        self.users.ping().await?;
        Ok(())
    }
}
