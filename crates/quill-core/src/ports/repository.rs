use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Account, Category, Post};
use crate::error::RepoError;

/// Account repository. The backend's unique keys on `username` and
/// `email` are the sole duplicate detector; `insert` and `update` report
/// a violation as `RepoError::Constraint`.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn insert(&self, account: Account) -> Result<Account, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, RepoError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepoError>;

    /// Persist a full account record by id.
    async fn update(&self, account: Account) -> Result<Account, RepoError>;

    /// Delete by id; `RepoError::NotFound` if no row matched.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Post repository. The bulk operations exist for the account cascade and
/// are never reached from a transport-level request directly.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    async fn find_by_author(&self, username: &str) -> Result<Vec<Post>, RepoError>;

    /// Posts whose `categories` collection contains `category`.
    async fn find_by_category(&self, category: &str) -> Result<Vec<Post>, RepoError>;

    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Re-attribute every post of `old` to `new`; returns rows updated.
    async fn rename_author(&self, old: &str, new: &str) -> Result<u64, RepoError>;

    /// Remove every post of `username`; returns rows deleted.
    async fn delete_by_author(&self, username: &str) -> Result<u64, RepoError>;
}

/// Category repository - create and list only.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: Category) -> Result<Category, RepoError>;

    async fn find_all(&self) -> Result<Vec<Category>, RepoError>;
}
