//! Argon2 password hashing implementation.

use argon2::password_hash::{
    self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use argon2::Argon2;

use quill_core::ports::{HashError, PasswordService};

/// Argon2-based credential adapter. Each `hash` call draws a fresh random
/// salt, so two hashes of the same password never match textually; the
/// salt and parameters travel inside the PHC hash string.
pub struct Argon2PasswordService {
    hasher: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            hasher: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_fault(err: password_hash::Error) -> HashError {
    HashError(err.to_string())
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);

        let hashed = self
            .hasher
            .hash_password(password.as_bytes(), &salt)
            .map_err(hash_fault)?;

        Ok(hashed.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let parsed = PasswordHash::new(hash).map_err(hash_fault)?;

        // a plain mismatch is a false outcome; anything else is a real fault
        match self.hasher.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(other) => Err(hash_fault(other)),
        }
    }
}
