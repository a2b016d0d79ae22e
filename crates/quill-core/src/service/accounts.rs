//! Account registry: registration, authentication, profile management,
//! and the cascading rename/delete rules.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Account, AccountChanges, AccountProfile};
use crate::error::{DomainError, RepoError};
use crate::ports::{AccountRepository, PasswordService, PostRepository};
use crate::service::{Cascade, policy};

pub struct AccountService {
    accounts: Arc<dyn AccountRepository>,
    passwords: Arc<dyn PasswordService>,
    cascade: Cascade,
}

impl AccountService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        posts: Arc<dyn PostRepository>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            accounts,
            passwords,
            cascade: Cascade::new(posts),
        }
    }

    /// Register a new account. There is no pre-check read: the unique
    /// keys on username/email are the only duplicate detector, so there
    /// is no window between check and insert.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<AccountProfile, DomainError> {
        let password_hash = self
            .passwords
            .hash(&password)
            .map_err(|err| DomainError::Internal(err.to_string()))?;

        let account = Account::new(username, email, password_hash);
        let saved = self
            .accounts
            .insert(account)
            .await
            .map_err(DomainError::from_repo)?;

        tracing::info!(account_id = %saved.id, "Account registered");
        Ok(saved.into())
    }

    /// Authenticate by username and password. An unknown username and a
    /// wrong password return the identical outcome.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AccountProfile, DomainError> {
        let Some(account) = self
            .accounts
            .find_by_username(username)
            .await
            .map_err(DomainError::from_repo)?
        else {
            return Err(DomainError::InvalidCredentials);
        };

        let valid = self
            .passwords
            .verify(password, &account.password_hash)
            .map_err(|err| DomainError::Internal(err.to_string()))?;

        if !valid {
            return Err(DomainError::InvalidCredentials);
        }

        Ok(account.into())
    }

    pub async fn get(&self, id: Uuid) -> Result<AccountProfile, DomainError> {
        self.accounts
            .find_by_id(id)
            .await
            .map_err(DomainError::from_repo)?
            .map(Into::into)
            .ok_or(DomainError::NotFound {
                entity: "account",
                id,
            })
    }

    /// Update an account's own fields. If the username changes, every
    /// post attributed to the old username is re-attributed afterwards.
    pub async fn update_profile(
        &self,
        id: Uuid,
        requester_id: Uuid,
        changes: AccountChanges,
    ) -> Result<AccountProfile, DomainError> {
        policy::require_account_owner(id, requester_id)?;

        let mut account = self
            .accounts
            .find_by_id(id)
            .await
            .map_err(DomainError::from_repo)?
            .ok_or(DomainError::NotFound {
                entity: "account",
                id,
            })?;

        let old_username = account.username.clone();

        if let Some(username) = changes.username {
            account.username = username;
        }
        if let Some(email) = changes.email {
            account.email = email;
        }
        if let Some(password) = changes.password {
            account.password_hash = self
                .passwords
                .hash(&password)
                .map_err(|err| DomainError::Internal(err.to_string()))?;
        }
        if let Some(profile_picture) = changes.profile_picture {
            account.profile_picture = profile_picture;
        }
        account.updated_at = Utc::now();

        let updated = self
            .accounts
            .update(account)
            .await
            .map_err(DomainError::from_repo)?;

        if updated.username != old_username {
            self.cascade
                .rename_author(&old_username, &updated.username)
                .await?;
        }

        Ok(updated.into())
    }

    /// Delete an account and all of its posts, posts first.
    pub async fn delete(&self, id: Uuid, requester_id: Uuid) -> Result<(), DomainError> {
        policy::require_account_owner(id, requester_id)?;

        let account = self
            .accounts
            .find_by_id(id)
            .await
            .map_err(DomainError::from_repo)?
            .ok_or(DomainError::NotFound {
                entity: "account",
                id,
            })?;

        self.cascade.delete_author_posts(&account.username).await?;

        match self.accounts.delete(id).await {
            Ok(()) => {
                tracing::info!(account_id = %id, "Account deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity: "account",
                id,
            }),
            Err(other) => Err(DomainError::Internal(other.to_string())),
        }
    }
}
