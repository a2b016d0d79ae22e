//! Consistency coordinator for the two-collection invariant: a post's
//! `author_username` must always name an existing account's current
//! username.
//!
//! The two cascades span independently-failable stores and are not
//! atomic. Ordering keeps the failure windows recoverable:
//!
//! - rename: account record first, then posts. A failure after the
//!   account changed is logged and surfaced as a partial result.
//! - delete: posts strictly first, then the account record. A crash in
//!   between leaves the account present with its posts already gone,
//!   which re-running the delete repairs; the reverse (a deleted account
//!   with live posts) cannot occur.

use std::sync::Arc;

use crate::error::DomainError;
use crate::ports::PostRepository;

pub struct Cascade {
    posts: Arc<dyn PostRepository>,
}

impl Cascade {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Second step of the rename path; the account record has already
    /// changed when this runs.
    pub async fn rename_author(&self, old: &str, new: &str) -> Result<u64, DomainError> {
        match self.posts.rename_author(old, new).await {
            Ok(renamed) => {
                tracing::debug!(old, new, renamed, "Propagated username to posts");
                Ok(renamed)
            }
            Err(err) => {
                tracing::error!(
                    old,
                    new,
                    error = %err,
                    "Account renamed but post authors were not updated"
                );
                Err(DomainError::Partial(format!(
                    "account renamed, but posts by '{old}' still carry the old username"
                )))
            }
        }
    }

    /// First step of the delete path; the account record is untouched
    /// until this has succeeded.
    pub async fn delete_author_posts(&self, username: &str) -> Result<u64, DomainError> {
        let deleted = self
            .posts
            .delete_by_author(username)
            .await
            .map_err(DomainError::from_repo)?;
        tracing::debug!(username, deleted, "Deleted posts ahead of account removal");
        Ok(deleted)
    }
}
