//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - the outcome taxonomy of the service layer.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Requester does not own the target resource")]
    Unauthorized,

    /// A username/email unique-key violation, deliberately not saying
    /// which field collided.
    #[error("Username or email already taken")]
    DuplicateCredential,

    /// Identical for unknown username and wrong password, so a caller
    /// cannot enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A multi-step operation changed the first store but not the second.
    #[error("Operation partially applied: {0}")]
    Partial(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Default mapping for persistence faults reaching the service layer.
    /// The only unique keys in the system are the account credentials, so
    /// a constraint violation always means `DuplicateCredential`.
    pub fn from_repo(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(_) => DomainError::DuplicateCredential,
            other => DomainError::Internal(other.to_string()),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_violations_become_duplicate_credential() {
        let err = DomainError::from_repo(RepoError::Constraint("accounts.username".into()));
        assert!(matches!(err, DomainError::DuplicateCredential));
    }

    #[test]
    fn other_repo_faults_become_internal() {
        let err = DomainError::from_repo(RepoError::Query("connection reset".into()));
        assert!(matches!(err, DomainError::Internal(_)));
    }
}
