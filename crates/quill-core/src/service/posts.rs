//! Content store: post CRUD with author-ownership checks and filtered
//! listing.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostChanges, PostFilter};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;
use crate::service::policy;

pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Create a post. The author field is taken verbatim from the
    /// payload; the transport layer supplies it from the request body.
    pub async fn create(&self, new_post: NewPost) -> Result<Post, DomainError> {
        let post = self
            .posts
            .insert(Post::new(new_post))
            .await
            .map_err(DomainError::from_repo)?;

        tracing::info!(post_id = %post.id, author = %post.author_username, "Post created");
        Ok(post)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await
            .map_err(DomainError::from_repo)?
            .ok_or(DomainError::NotFound { entity: "post", id })
    }

    pub async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
        let posts = match filter {
            PostFilter::All => self.posts.find_all().await,
            PostFilter::Author(username) => self.posts.find_by_author(&username).await,
            PostFilter::Category(name) => self.posts.find_by_category(&name).await,
        };
        posts.map_err(DomainError::from_repo)
    }

    /// Update a post's content fields. Only the stored author may do so;
    /// the check runs before any write.
    pub async fn update(
        &self,
        id: Uuid,
        requester_username: &str,
        changes: PostChanges,
    ) -> Result<Post, DomainError> {
        let mut post = self.get(id).await?;
        policy::require_post_author(&post, requester_username)?;

        if let Some(title) = changes.title {
            post.title = title;
        }
        if let Some(description) = changes.description {
            post.description = description;
        }
        if let Some(photo) = changes.photo {
            post.photo = photo;
        }
        if let Some(categories) = changes.categories {
            post.categories = categories;
        }
        post.updated_at = Utc::now();

        self.posts
            .update(post)
            .await
            .map_err(DomainError::from_repo)
    }

    pub async fn delete(&self, id: Uuid, requester_username: &str) -> Result<(), DomainError> {
        let post = self.get(id).await?;
        policy::require_post_author(&post, requester_username)?;

        match self.posts.delete(id).await {
            Ok(()) => Ok(()),
            Err(RepoError::NotFound) => Err(DomainError::NotFound { entity: "post", id }),
            Err(other) => Err(DomainError::Internal(other.to_string())),
        }
    }
}
