//! Authorization gate - ownership checks applied before every mutation.
//!
//! Two rules, no hierarchy, no admin override. Both run before any write,
//! so a rejection is always side-effect-free.

use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;

/// Account-mutation rule: the requester must be the target account.
pub fn require_account_owner(target: Uuid, requester: Uuid) -> Result<(), DomainError> {
    if requester == target {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}

/// Post-mutation rule: the requester must be the stored author.
pub fn require_post_author(post: &Post, requester: &str) -> Result<(), DomainError> {
    if post.author_username == requester {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPost;

    fn post_by(author: &str) -> Post {
        Post::new(NewPost {
            title: "T".to_string(),
            description: "D".to_string(),
            photo: String::new(),
            author_username: author.to_string(),
            categories: vec![],
        })
    }

    #[test]
    fn owner_may_mutate_own_account() {
        let id = Uuid::new_v4();
        assert!(require_account_owner(id, id).is_ok());
    }

    #[test]
    fn other_account_is_rejected() {
        let err = require_account_owner(Uuid::new_v4(), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized));
    }

    #[test]
    fn only_stored_author_may_mutate_post() {
        let post = post_by("alice");
        assert!(require_post_author(&post, "alice").is_ok());
        assert!(matches!(
            require_post_author(&post, "bob"),
            Err(DomainError::Unauthorized)
        ));
    }
}
