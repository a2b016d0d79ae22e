//! Credential-handling port.

/// Password hashing service - the credential boundary. Plaintext goes in,
/// an opaque salted hash string comes out, and nothing else crosses.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password with a fresh random salt, so hashing
    /// the same password twice yields different outputs.
    fn hash(&self, password: &str) -> Result<String, HashError>;

    /// Verify a password against a stored hash. A plain mismatch is
    /// `Ok(false)`, never an error.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

/// Hashing is not expected to fail in normal operation; this surfaces as
/// an internal fault, never a user-facing outcome.
#[derive(Debug, thiserror::Error)]
#[error("Hashing error: {0}")]
pub struct HashError(pub String);
