use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a categorized piece of content owned by an account.
///
/// `author_username` is a denormalized reference to `Account.username`,
/// not to the account id. The consistency cascade keeps it matching the
/// author's current username across renames and deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub photo: String,
    pub author_username: String,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with generated ID and timestamps.
    pub fn new(new: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            photo: new.photo,
            author_username: new.author_username,
            categories: new.categories,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub photo: String,
    pub author_username: String,
    pub categories: Vec<String>,
}

/// Partial update of a post's content fields. The author is not
/// changeable through an update.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub categories: Option<Vec<String>>,
}

/// Listing filter for posts. `Author` and `Category` mirror the
/// `?user=` / `?cat=` query parameters of the transport layer.
#[derive(Debug, Clone)]
pub enum PostFilter {
    All,
    Author(String),
    Category(String),
}
