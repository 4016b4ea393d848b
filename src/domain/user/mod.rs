//! User domain
//!
//! Identity records, their public projection, validation rules and the
//! repository trait for the `users` relation.

mod entity;
mod repository;
mod validation;

pub use entity::{PublicUser, User, UserId};
pub use repository::{UserChanges, UserRepository};
pub use validation::{
    validate_email, validate_name, validate_password, validate_user_id, UserValidationError,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
