//! Data Transfer Objects - request/response types for the API.
//!
//! Requester identity (`user_id` on account mutations, `username` on post
//! mutations) is supplied in the request body, mirroring the system this
//! one replaces. There is no verified session; the ownership checks
//! compare these fields against the stored owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request to update an account's own fields. `user_id` is the
/// body-supplied requester identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    pub user_id: Uuid,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub profile_picture: Option<String>,
}

/// Request to delete an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAccountRequest {
    pub user_id: Uuid,
}

/// Response containing an account's public information. Never carries
/// password material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub profile_picture: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a post. The author field is taken verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub photo: String,
    pub author_username: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Request to update a post. `username` is the body-supplied requester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub username: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub categories: Option<Vec<String>>,
}

/// Request to delete a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostRequest {
    pub username: String,
}

/// Query parameters for listing posts: `?user=` filters by author,
/// `?cat=` by category membership; neither means everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListQuery {
    pub user: Option<String>,
    pub cat: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub photo: String,
    pub author_username: String,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
