//! Domain layer - Core business logic and entities

pub mod account;
pub mod error;
pub mod media;
pub mod user;

pub use account::{AccountError, DeletionOutcome, DeletionSummary};
pub use error::DomainError;
pub use media::{
    MediaAsset, MediaAssetRepository, MediaAuthority, MediaCleanupOutcome, MediaStorageClient,
};
pub use user::{PublicUser, User, UserChanges, UserId, UserRepository, UserValidationError};
