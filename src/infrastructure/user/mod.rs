//! User infrastructure module
//!
//! Password hashing with Argon2 and the in-memory and PostgreSQL
//! implementations of the user repository.

mod password;
mod postgres_repository;
mod repository;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;

#[cfg(test)]
pub use password::test_hasher;
