//! HTTP handlers and route configuration.

mod auth;
mod categories;
mod health;
mod posts;
mod uploads;
mod users;

pub use uploads::ImageDir;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login)),
            )
            .service(
                web::scope("/users")
                    .route("/{id}", web::get().to(users::get_account))
                    .route("/{id}", web::put().to(users::update_account))
                    .route("/{id}", web::delete().to(users::delete_account)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            )
            .service(
                web::scope("/categories")
                    .route("", web::get().to(categories::list_categories))
                    .route("", web::post().to(categories::create_category)),
            )
            .route("/upload", web::post().to(uploads::upload)),
    );
}
