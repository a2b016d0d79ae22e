#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres::{PostgresAccountRepository, PostgresPostRepository};
    use quill_core::domain::Account;
    use quill_core::error::RepoError;
    use quill_core::ports::{AccountRepository, PostRepository};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: post_id,
                title: "Test Post".to_owned(),
                description: "Content".to_owned(),
                photo: String::new(),
                author_username: "alice".to_owned(),
                categories: vec!["travel".to_owned()],
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.author_username, "alice");
        assert_eq!(found.id, post_id);
    }

    #[tokio::test]
    async fn test_rename_author_reports_rows_updated() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let renamed = repo.rename_author("alice", "alice2").await.unwrap();
        assert_eq!(renamed, 3);
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let err = repo.delete(uuid::Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_unique_violation_classified_as_constraint() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"accounts_username_key\""
                    .to_owned(),
            ))])
            .into_connection();

        let repo = PostgresAccountRepository::new(db);

        let account = Account::new(
            "alice".to_owned(),
            "alice@example.com".to_owned(),
            "$argon2id$stub".to_owned(),
        );

        let err = repo.insert(account).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }
}
