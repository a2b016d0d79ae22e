//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use quill_core::domain::{Account, Category, Post};
use quill_core::error::RepoError;
use quill_core::ports::{AccountRepository, CategoryRepository, PostRepository};

use super::entity::{account, category, post};

/// Classify a write error: unique-key violations become `Constraint`,
/// everything else is a plain query fault.
fn classify(err: DbErr) -> RepoError {
    if let DbErr::RecordNotUpdated = err {
        return RepoError::NotFound;
    }
    let err_str = err.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint(err_str)
    } else {
        RepoError::Query(err_str)
    }
}

fn query_err(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

/// PostgreSQL account repository.
pub struct PostgresAccountRepository {
    db: DbConn,
}

impl PostgresAccountRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn insert(&self, acc: Account) -> Result<Account, RepoError> {
        let model = account::ActiveModel::from(acc)
            .insert(&self.db)
            .await
            .map_err(classify)?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, RepoError> {
        let result = account::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepoError> {
        let result = account::Entity::find()
            .filter(account::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, acc: Account) -> Result<Account, RepoError> {
        let model = account::ActiveModel::from(acc)
            .update(&self.db)
            .await
            .map_err(classify)?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = account::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, new_post: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(new_post)
            .insert(&self.db)
            .await
            .map_err(classify)?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = post::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = post::Entity::find()
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_author(&self, username: &str) -> Result<Vec<Post>, RepoError> {
        let result = post::Entity::find()
            .filter(post::Column::AuthorUsername.eq(username))
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_category(&self, name: &str) -> Result<Vec<Post>, RepoError> {
        // membership test on the text[] column
        let result = post::Entity::find()
            .filter(Expr::val(name).eq(Expr::cust("ANY(categories)")))
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, updated: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(updated)
            .update(&self.db)
            .await
            .map_err(classify)?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = post::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn rename_author(&self, old: &str, new: &str) -> Result<u64, RepoError> {
        let result = post::Entity::update_many()
            .col_expr(post::Column::AuthorUsername, Expr::value(new))
            .col_expr(post::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(post::Column::AuthorUsername.eq(old))
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.rows_affected)
    }

    async fn delete_by_author(&self, username: &str) -> Result<u64, RepoError> {
        let result = post::Entity::delete_many()
            .filter(post::Column::AuthorUsername.eq(username))
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.rows_affected)
    }
}

/// PostgreSQL category repository.
pub struct PostgresCategoryRepository {
    db: DbConn,
}

impl PostgresCategoryRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, new_category: Category) -> Result<Category, RepoError> {
        let model = category::ActiveModel::from(new_category)
            .insert(&self.db)
            .await
            .map_err(classify)?;

        Ok(model.into())
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        let result = category::Entity::find()
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
