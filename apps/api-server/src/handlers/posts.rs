//! Post handlers: CRUD plus filtered listing.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostChanges, PostFilter};
use quill_shared::ApiResponse;
use quill_shared::dto::{
    CreatePostRequest, DeletePostRequest, PostListQuery, PostResponse, UpdatePostRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        description: post.description,
        photo: post.photo,
        author_username: post.author_username,
        categories: post.categories,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            description: req.description,
            photo: req.photo,
            author_username: req.author_username,
            categories: req.categories,
        })
        .await?;

    Ok(HttpResponse::Created().json(post_response(post)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// GET /api/posts?user=..&cat=..
///
/// `user` wins over `cat` when both are present; no filter lists
/// everything.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let filter = if let Some(user) = query.user {
        PostFilter::Author(user)
    } else if let Some(cat) = query.cat {
        PostFilter::Category(cat)
    } else {
        PostFilter::All
    };

    let posts = state.posts.list(filter).await?;
    let posts: Vec<PostResponse> = posts.into_iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// PUT /api/posts/{id}
///
/// `username` in the body is the requester; only the stored author
/// passes the ownership check.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let changes = PostChanges {
        title: req.title,
        description: req.description,
        photo: req.photo,
        categories: req.categories,
    };

    let post = state
        .posts
        .update(path.into_inner(), &req.username, changes)
        .await?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<DeletePostRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .delete(path.into_inner(), &body.into_inner().username)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Post has been deleted...")))
}
