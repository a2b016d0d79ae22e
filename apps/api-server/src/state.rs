//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{AccountRepository, CategoryRepository, PasswordService, PostRepository};
use quill_core::service::{AccountService, CategoryService, PostService};
use quill_infra::auth::Argon2PasswordService;
use quill_infra::database::{
    self, DatabaseConfig, InMemoryAccountRepository, InMemoryCategoryRepository,
    InMemoryPostRepository, PostgresAccountRepository, PostgresCategoryRepository,
    PostgresPostRepository,
};

type Repositories = (
    Arc<dyn AccountRepository>,
    Arc<dyn PostRepository>,
    Arc<dyn CategoryRepository>,
);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub posts: Arc<PostService>,
    pub categories: Arc<CategoryService>,
}

fn in_memory_repositories() -> Repositories {
    (
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(InMemoryCategoryRepository::new()),
    )
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let (accounts_repo, posts_repo, categories_repo): Repositories = match db_config {
            Some(config) => match database::connect(config).await {
                Ok(db) => (
                    Arc::new(PostgresAccountRepository::new(db.clone())),
                    Arc::new(PostgresPostRepository::new(db.clone())),
                    Arc::new(PostgresCategoryRepository::new(db)),
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    in_memory_repositories()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                in_memory_repositories()
            }
        };

        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        tracing::info!("Application state initialized");

        Self {
            accounts: Arc::new(AccountService::new(
                accounts_repo,
                posts_repo.clone(),
                passwords,
            )),
            posts: Arc::new(PostService::new(posts_repo)),
            categories: Arc::new(CategoryService::new(categories_repo)),
        }
    }
}
