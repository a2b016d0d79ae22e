//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use quill_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub service: &'static str,
    pub version: &'static str,
    pub checked_at: String,
}

/// GET /api/health
///
/// Liveness only; it deliberately does not probe the repositories, so it
/// stays green while the server runs in in-memory mode.
pub async fn health_check(_state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let status = ServiceStatus {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        checked_at: chrono::Utc::now().to_rfc3339(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(status)))
}
