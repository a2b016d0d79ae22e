//! Category handlers: create and list.

use actix_web::{HttpResponse, web};

use quill_core::domain::Category;
use quill_shared::dto::{CategoryResponse, CreateCategoryRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn category_response(category: Category) -> CategoryResponse {
    CategoryResponse {
        id: category.id,
        name: category.name,
        created_at: category.created_at,
        updated_at: category.updated_at,
    }
}

/// POST /api/categories
pub async fn create_category(
    state: web::Data<AppState>,
    body: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let category = state.categories.create(body.into_inner().name).await?;

    Ok(HttpResponse::Created().json(category_response(category)))
}

/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.categories.list_all().await?;
    let categories: Vec<CategoryResponse> =
        categories.into_iter().map(category_response).collect();

    Ok(HttpResponse::Ok().json(categories))
}
