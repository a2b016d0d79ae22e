//! Authentication handlers.

use actix_web::{HttpResponse, web};

use quill_shared::ApiResponse;
use quill_shared::dto::{LoginRequest, RegisterRequest};

use crate::handlers::users::account_response;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input; duplicate detection belongs to the persistence
    // backend, not to a pre-check read here
    if req.username.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Username and password are required".to_string(),
        ));
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    let profile = state
        .accounts
        .register(req.username, req.email, req.password)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(account_response(profile))))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let profile = state
        .accounts
        .authenticate(&req.username, &req.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(account_response(profile))))
}
