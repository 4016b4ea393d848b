//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email exceeds maximum length of {0} characters")]
    EmailTooLong(usize),

    #[error("Password cannot be empty")]
    EmptyPassword,
}

const MAX_USER_ID_LENGTH: usize = 64;
const MAX_NAME_LENGTH: usize = 255;
const MAX_EMAIL_LENGTH: usize = 255;

/// Validate a user ID
///
/// IDs are opaque; only emptiness and length are checked.
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    if id.chars().count() > MAX_USER_ID_LENGTH {
        return Err(UserValidationError::IdTooLong(MAX_USER_ID_LENGTH));
    }

    Ok(())
}

/// Validate a display/login name
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a contact email
///
/// The address format is not checked, only presence and column width.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.trim().is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    Ok(())
}

/// Validate a password supplied at registration
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_ids() {
        assert!(validate_user_id("5f0c1c2e-8d7b-4f57-9a53-0f1e2d3c4b5a").is_ok());
        assert!(validate_user_id("a").is_ok());
    }

    #[test]
    fn test_user_id_errors() {
        assert_eq!(validate_user_id(""), Err(UserValidationError::EmptyId));
        assert_eq!(
            validate_user_id(&"a".repeat(65)),
            Err(UserValidationError::IdTooLong(64))
        );
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_name("ada").is_ok());
        assert!(validate_name("Ada Lovelace").is_ok());
        assert_eq!(validate_name(""), Err(UserValidationError::EmptyName));
        assert_eq!(validate_name("   "), Err(UserValidationError::EmptyName));
        assert_eq!(
            validate_name(&"n".repeat(256)),
            Err(UserValidationError::NameTooLong(255))
        );
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("ada@x.io").is_ok());
        assert_eq!(validate_email(""), Err(UserValidationError::EmptyEmail));
        assert_eq!(
            validate_email(&"e".repeat(256)),
            Err(UserValidationError::EmailTooLong(255))
        );
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("s3cret").is_ok());
        assert!(validate_password(" ").is_ok());
        assert_eq!(
            validate_password(""),
            Err(UserValidationError::EmptyPassword)
        );
    }
}
