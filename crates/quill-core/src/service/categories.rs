//! Category registry - create and list only, matching the source system.

use std::sync::Arc;

use crate::domain::Category;
use crate::error::DomainError;
use crate::ports::CategoryRepository;

pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// Create a category. Names are deliberately not unique.
    pub async fn create(&self, name: String) -> Result<Category, DomainError> {
        self.categories
            .insert(Category::new(name))
            .await
            .map_err(DomainError::from_repo)
    }

    pub async fn list_all(&self) -> Result<Vec<Category>, DomainError> {
        self.categories
            .find_all()
            .await
            .map_err(DomainError::from_repo)
    }
}
