//! Application state for shared services

use std::sync::Arc;

use crate::domain::media::{MediaAssetRepository, MediaStorageClient};
use crate::domain::user::{PublicUser, UserRepository};
use crate::domain::{AccountError, DeletionOutcome};
use crate::infrastructure::account::{AccountService, RegisterRequest, UpdateProfileRequest};
use crate::infrastructure::user::PasswordHasher;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
}

impl AppState {
    pub fn new(account_service: Arc<dyn AccountServiceTrait>) -> Self {
        Self { account_service }
    }
}

/// Trait for account lifecycle operations
#[async_trait::async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<PublicUser, AccountError>;
    async fn authenticate(&self, name: &str, password: &str) -> Result<PublicUser, AccountError>;
    async fn update_profile(
        &self,
        id: &str,
        request: UpdateProfileRequest,
    ) -> Result<PublicUser, AccountError>;
    async fn delete(&self, id: &str) -> Result<DeletionOutcome, AccountError>;
    async fn find_public(&self, id: &str) -> Result<PublicUser, AccountError>;
    /// Store round-trip for readiness probes
    async fn ping(&self) -> Result<(), AccountError>;
}

#[async_trait::async_trait]
impl<U, M, H, C> AccountServiceTrait for AccountService<U, M, H, C>
where
    U: UserRepository + 'static,
    M: MediaAssetRepository + 'static,
    H: PasswordHasher + 'static,
    C: MediaStorageClient + 'static,
{
    async fn register(&self, request: RegisterRequest) -> Result<PublicUser, AccountError> {
        AccountService::register(self, request).await
    }

    async fn authenticate(&self, name: &str, password: &str) -> Result<PublicUser, AccountError> {
        AccountService::authenticate(self, name, password).await
    }

    async fn update_profile(
        &self,
        id: &str,
        request: UpdateProfileRequest,
    ) -> Result<PublicUser, AccountError> {
        AccountService::update_profile(self, id, request).await
    }

    async fn delete(&self, id: &str) -> Result<DeletionOutcome, AccountError> {
        AccountService::delete(self, id).await
    }

    async fn find_public(&self, id: &str) -> Result<PublicUser, AccountError> {
        AccountService::find_public(self, id).await
    }

    async fn ping(&self) -> Result<(), AccountError> {
        AccountService::ping(self).await
    }
}
