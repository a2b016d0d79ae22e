//! Account handlers: lookup, profile update, deletion.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::DomainError;
use quill_core::domain::{AccountChanges, AccountProfile};
use quill_shared::ApiResponse;
use quill_shared::dto::{AccountResponse, DeleteAccountRequest, UpdateAccountRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn account_response(profile: AccountProfile) -> AccountResponse {
    AccountResponse {
        id: profile.id,
        username: profile.username,
        email: profile.email,
        profile_picture: profile.profile_picture,
        created_at: profile.created_at,
        updated_at: profile.updated_at,
    }
}

/// GET /api/users/{id}
pub async fn get_account(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let profile = state.accounts.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(account_response(profile)))
}

/// PUT /api/users/{id}
///
/// `user_id` in the body is the requester; only the account itself
/// passes the ownership check.
pub async fn update_account(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateAccountRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let changes = AccountChanges {
        username: req.username,
        email: req.email,
        password: req.password,
        profile_picture: req.profile_picture,
    };

    let profile = state
        .accounts
        .update_profile(path.into_inner(), req.user_id, changes)
        .await?;

    Ok(HttpResponse::Ok().json(account_response(profile)))
}

/// DELETE /api/users/{id}
pub async fn delete_account(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<DeleteAccountRequest>,
) -> AppResult<HttpResponse> {
    match state
        .accounts
        .delete(path.into_inner(), body.into_inner().user_id)
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok()
            .json(ApiResponse::ok_with_message((), "User has been deleted..."))),
        Err(DomainError::NotFound { .. }) => {
            Err(AppError::NotFound("User not found!".to_string()))
        }
        Err(other) => Err(other.into()),
    }
}
