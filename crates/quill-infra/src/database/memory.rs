//! In-memory repositories - used when no database is configured.
//!
//! Process-local and non-durable, but they enforce the same uniqueness
//! rules as the Postgres schema so the service layer behaves identically
//! over either backend.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Account, Category, Post};
use quill_core::error::RepoError;
use quill_core::ports::{AccountRepository, CategoryRepository, PostRepository};

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: Account) -> Result<Account, RepoError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.username == account.username) {
            return Err(RepoError::Constraint(
                "unique violation on accounts.username".to_string(),
            ));
        }
        if accounts.values().any(|a| a.email == account.email) {
            return Err(RepoError::Constraint(
                "unique violation on accounts.email".to_string(),
            ));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, RepoError> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepoError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.username == username).cloned())
    }

    async fn update(&self, account: Account) -> Result<Account, RepoError> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(RepoError::NotFound);
        }
        if accounts
            .values()
            .any(|a| a.id != account.id && a.username == account.username)
        {
            return Err(RepoError::Constraint(
                "unique violation on accounts.username".to_string(),
            ));
        }
        if accounts
            .values()
            .any(|a| a.id != account.id && a.email == account.email)
        {
            return Err(RepoError::Constraint(
                "unique violation on accounts.email".to_string(),
            ));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.accounts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.values().cloned().collect())
    }

    async fn find_by_author(&self, username: &str) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts
            .values()
            .filter(|p| p.author_username == username)
            .cloned()
            .collect())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts
            .values()
            .filter(|p| p.categories.iter().any(|c| c == category))
            .cloned()
            .collect())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        if !posts.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }

        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.posts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    async fn rename_author(&self, old: &str, new: &str) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let now = Utc::now();
        let mut renamed = 0;

        for post in posts.values_mut().filter(|p| p.author_username == old) {
            post.author_username = new.to_string();
            post.updated_at = now;
            renamed += 1;
        }

        Ok(renamed)
    }

    async fn delete_by_author(&self, username: &str) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();

        posts.retain(|_, p| p.author_username != username);

        Ok((before - posts.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<HashMap<Uuid, Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, category: Category) -> Result<Category, RepoError> {
        // no uniqueness rule on the name
        self.categories
            .write()
            .await
            .insert(category.id, category.clone());
        Ok(category)
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        Ok(self.categories.read().await.values().cloned().collect())
    }
}
