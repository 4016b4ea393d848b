//! Password hashing utilities using Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password with a fresh random salt
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against a hash
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Argon2id password hasher with a tunable work factor
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Create a hasher with the argon2 crate's default cost
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher with an explicit cost
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, DomainError> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            DomainError::configuration(format!("Invalid Argon2 parameters: {}", e))
        })?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        // Cost parameters come from the stored PHC string, not from self
        self.argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Minimum-cost hasher so tests do not spend seconds in key derivation
#[cfg(test)]
pub fn test_hasher() -> Argon2Hasher {
    Argon2Hasher::with_params(8, 1, 1).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = test_hasher();
        let password = "my_secure_password";

        let hash = hasher.hash(password).unwrap();

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_is_unique() {
        let hasher = test_hasher();
        let password = "my_secure_password";

        let hash1 = hasher.hash(password).unwrap();
        let hash2 = hasher.hash(password).unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);

        // But both should verify correctly
        assert!(hasher.verify(password, &hash1));
        assert!(hasher.verify(password, &hash2));
    }

    #[test]
    fn test_single_character_mutations_fail() {
        let hasher = test_hasher();
        let password = "s3cret";
        let hash = hasher.hash(password).unwrap();

        for i in 0..password.len() {
            let mut mutated = password.as_bytes().to_vec();
            mutated[i] = if mutated[i] == b'x' { b'y' } else { b'x' };
            let mutated = String::from_utf8(mutated).unwrap();

            assert!(!hasher.verify(&mutated, &hash), "{} verified", mutated);
        }

        assert!(!hasher.verify("s3cre", &hash));
        assert!(!hasher.verify("s3crett", &hash));
    }

    #[test]
    fn test_distinct_passwords_do_not_cross_verify() {
        let hasher = test_hasher();
        let passwords = ["alpha", "Alpha", "alpha ", "beta", "0"];

        for p1 in passwords {
            let hash = hasher.hash(p1).unwrap();

            for p2 in passwords {
                assert_eq!(hasher.verify(p2, &hash), p1 == p2);
            }
        }
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = test_hasher();

        assert!(!hasher.verify("password", "invalid_hash_format"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_verify_uses_stored_cost() {
        let cheap = test_hasher();
        let other = Argon2Hasher::with_params(16, 2, 1).unwrap();

        let hash = cheap.hash("password").unwrap();
        assert!(other.verify("password", &hash));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let result = Argon2Hasher::with_params(0, 0, 0);
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_default_cost_produces_argon2id() {
        let hash = Argon2Hasher::new().hash("password").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }
}
