//! Account lifecycle errors

use thiserror::Error;

use crate::domain::media::MediaCleanupOutcome;
use crate::domain::user::UserValidationError;
use crate::domain::DomainError;

/// Outward failure taxonomy of the account use cases
///
/// Infrastructure failures never pass through unchanged: they collapse into
/// `StoreUnavailable`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Error: name '{name}' already exists")]
    DuplicateName { name: String },

    /// Same outcome for an unknown name and a wrong password
    #[error("Invalid name or password")]
    Unauthorized,

    #[error("User '{id}' not found")]
    NotFound { id: String },

    /// The user row is gone but its media directory was not purged
    #[error("User '{user_id}' was deleted but media cleanup failed: {reason}")]
    ExternalCleanupFailed { user_id: String, reason: String },

    #[error("Account store unavailable: {message}")]
    StoreUnavailable { message: String },
}

impl AccountError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn external_cleanup_failed(user_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExternalCleanupFailed {
            user_id: user_id.into(),
            reason: reason.into(),
        }
    }

    pub fn cleanup_outcome(user_id: impl Into<String>, outcome: &MediaCleanupOutcome) -> Self {
        Self::external_cleanup_failed(user_id, outcome.to_string())
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }
}

impl From<UserValidationError> for AccountError {
    fn from(err: UserValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { message } => Self::Validation { message },
            DomainError::NotFound { message } => Self::NotFound { id: message },
            DomainError::Conflict { message }
            | DomainError::Storage { message }
            | DomainError::Configuration { message }
            | DomainError::Internal { message } => Self::StoreUnavailable { message },
            DomainError::ExternalService { service, message } => Self::StoreUnavailable {
                message: format!("{}: {}", service, message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_becomes_store_unavailable() {
        let err: AccountError = DomainError::storage("connection reset").into();
        assert_eq!(err, AccountError::store_unavailable("connection reset"));
    }

    #[test]
    fn test_validation_error_passes_through() {
        let err: AccountError = UserValidationError::EmptyName.into();
        assert_eq!(err, AccountError::validation("Name cannot be empty"));
    }

    #[test]
    fn test_duplicate_name_message() {
        let err = AccountError::duplicate_name("ada");
        assert_eq!(err.to_string(), "Error: name 'ada' already exists");
    }

    #[test]
    fn test_cleanup_outcome_message() {
        let err = AccountError::cleanup_outcome("user-1", &MediaCleanupOutcome::NotDeleted);
        assert_eq!(
            err,
            AccountError::external_cleanup_failed(
                "user-1",
                "service reported the directory was not deleted"
            )
        );
    }
}
