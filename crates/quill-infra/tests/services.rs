//! Service-level behavior tests over the in-memory repositories.

use std::sync::Arc;

use async_trait::async_trait;
use quill_core::domain::{AccountChanges, NewPost, Post, PostChanges, PostFilter};
use quill_core::error::{DomainError, RepoError};
use quill_core::ports::PostRepository;
use uuid::Uuid;
use quill_core::service::{AccountService, CategoryService, PostService};
use quill_infra::auth::Argon2PasswordService;
use quill_infra::database::{
    InMemoryAccountRepository, InMemoryCategoryRepository, InMemoryPostRepository,
};

fn services() -> (AccountService, PostService, CategoryService) {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let posts = Arc::new(InMemoryPostRepository::new());
    let passwords = Arc::new(Argon2PasswordService::new());

    (
        AccountService::new(accounts, posts.clone(), passwords),
        PostService::new(posts),
        CategoryService::new(Arc::new(InMemoryCategoryRepository::new())),
    )
}

fn new_post(author: &str, title: &str, categories: &[&str]) -> NewPost {
    NewPost {
        title: title.to_string(),
        description: format!("{title} description"),
        photo: String::new(),
        author_username: author.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

#[tokio::test]
async fn authenticate_returns_profile_without_password_material() {
    let (accounts, _, _) = services();

    accounts
        .register("alice".into(), "alice@example.com".into(), "hunter2".into())
        .await
        .unwrap();

    let profile = accounts.authenticate("alice", "hunter2").await.unwrap();
    assert_eq!(profile.username, "alice");

    // the profile type has no password field at all; check the wire shape
    let json = serde_json::to_value(&profile).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert!(!keys.iter().any(|k| k.contains("password")));
}

#[tokio::test]
async fn wrong_password_and_unknown_user_are_indistinguishable() {
    let (accounts, _, _) = services();

    accounts
        .register("alice".into(), "alice@example.com".into(), "hunter2".into())
        .await
        .unwrap();

    let wrong_password = accounts.authenticate("alice", "nope").await.unwrap_err();
    let unknown_user = accounts.authenticate("nobody", "whatever").await.unwrap_err();

    assert!(matches!(wrong_password, DomainError::InvalidCredentials));
    assert!(matches!(unknown_user, DomainError::InvalidCredentials));
}

#[tokio::test]
async fn duplicate_username_or_email_is_rejected() {
    let (accounts, _, _) = services();

    accounts
        .register("alice".into(), "alice@example.com".into(), "pw".into())
        .await
        .unwrap();

    let same_username = accounts
        .register("alice".into(), "other@example.com".into(), "pw".into())
        .await
        .unwrap_err();
    assert!(matches!(same_username, DomainError::DuplicateCredential));

    let same_email = accounts
        .register("bob".into(), "alice@example.com".into(), "pw".into())
        .await
        .unwrap_err();
    assert!(matches!(same_email, DomainError::DuplicateCredential));
}

#[tokio::test]
async fn only_the_stored_author_may_mutate_a_post() {
    let (_, posts, _) = services();

    let post = posts.create(new_post("alice", "Hello", &[])).await.unwrap();

    let update = posts
        .update(post.id, "mallory", PostChanges::default())
        .await
        .unwrap_err();
    assert!(matches!(update, DomainError::Unauthorized));

    let delete = posts.delete(post.id, "mallory").await.unwrap_err();
    assert!(matches!(delete, DomainError::Unauthorized));

    // rejection was side-effect-free
    let unchanged = posts.get(post.id).await.unwrap();
    assert_eq!(unchanged.title, "Hello");
    assert_eq!(unchanged.author_username, "alice");
}

#[tokio::test]
async fn account_rename_reattributes_every_post() {
    let (accounts, posts, _) = services();

    let alice = accounts
        .register("alice".into(), "alice@example.com".into(), "pw".into())
        .await
        .unwrap();

    posts.create(new_post("alice", "First", &[])).await.unwrap();
    posts.create(new_post("alice", "Second", &[])).await.unwrap();

    let changes = AccountChanges {
        username: Some("alice2".into()),
        ..AccountChanges::default()
    };
    let renamed = accounts
        .update_profile(alice.id, alice.id, changes)
        .await
        .unwrap();
    assert_eq!(renamed.username, "alice2");

    let old = posts.list(PostFilter::Author("alice".into())).await.unwrap();
    assert!(old.is_empty());

    let new = posts
        .list(PostFilter::Author("alice2".into()))
        .await
        .unwrap();
    assert_eq!(new.len(), 2);
}

#[tokio::test]
async fn update_profile_by_another_account_is_rejected_before_any_write() {
    let (accounts, posts, _) = services();

    let alice = accounts
        .register("alice".into(), "alice@example.com".into(), "pw".into())
        .await
        .unwrap();
    let bob = accounts
        .register("bob".into(), "bob@example.com".into(), "pw".into())
        .await
        .unwrap();

    posts.create(new_post("alice", "Post", &[])).await.unwrap();

    let changes = AccountChanges {
        username: Some("stolen".into()),
        ..AccountChanges::default()
    };
    let err = accounts
        .update_profile(alice.id, bob.id, changes)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));

    let untouched = posts.list(PostFilter::Author("alice".into())).await.unwrap();
    assert_eq!(untouched.len(), 1);
    assert!(accounts.get(alice.id).await.unwrap().username == "alice");
}

#[tokio::test]
async fn account_delete_removes_account_and_all_its_posts() {
    let (accounts, posts, _) = services();

    let alice = accounts
        .register("alice".into(), "alice@example.com".into(), "pw".into())
        .await
        .unwrap();
    posts.create(new_post("alice", "First", &[])).await.unwrap();
    posts.create(new_post("alice", "Second", &[])).await.unwrap();

    accounts.delete(alice.id, alice.id).await.unwrap();

    let remaining = posts.list(PostFilter::Author("alice".into())).await.unwrap();
    assert!(remaining.is_empty());

    let gone = accounts.get(alice.id).await.unwrap_err();
    assert!(matches!(gone, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn unfiltered_listing_is_the_union_over_authors() {
    let (_, posts, _) = services();

    posts.create(new_post("alice", "A1", &[])).await.unwrap();
    posts.create(new_post("alice", "A2", &[])).await.unwrap();
    posts.create(new_post("bob", "B1", &[])).await.unwrap();

    let mut all: Vec<_> = posts
        .list(PostFilter::All)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();

    let mut union: Vec<_> = posts
        .list(PostFilter::Author("alice".into()))
        .await
        .unwrap()
        .into_iter()
        .chain(
            posts
                .list(PostFilter::Author("bob".into()))
                .await
                .unwrap(),
        )
        .map(|p| p.id)
        .collect();

    all.sort();
    union.sort();
    assert_eq!(all, union);
}

#[tokio::test]
async fn category_filter_matches_membership() {
    let (_, posts, categories) = services();

    categories.create("travel".into()).await.unwrap();
    posts
        .create(new_post("alice", "Trip", &["travel", "food"]))
        .await
        .unwrap();
    posts.create(new_post("alice", "Other", &["food"])).await.unwrap();

    let travel = posts
        .list(PostFilter::Category("travel".into()))
        .await
        .unwrap();
    assert_eq!(travel.len(), 1);
    assert_eq!(travel[0].title, "Trip");

    let listed = categories.list_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "travel");
}

/// Post store whose bulk rename always fails, everything else behaving
/// normally. Stands in for the backend dying between the two steps of
/// the rename cascade.
#[derive(Default)]
struct RenameAlwaysFails {
    inner: InMemoryPostRepository,
}

#[async_trait]
impl PostRepository for RenameAlwaysFails {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        self.inner.insert(post).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        self.inner.find_all().await
    }

    async fn find_by_author(&self, username: &str) -> Result<Vec<Post>, RepoError> {
        self.inner.find_by_author(username).await
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Post>, RepoError> {
        self.inner.find_by_category(category).await
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        self.inner.update(post).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.inner.delete(id).await
    }

    async fn rename_author(&self, _old: &str, _new: &str) -> Result<u64, RepoError> {
        Err(RepoError::Query("connection reset mid-cascade".to_string()))
    }

    async fn delete_by_author(&self, username: &str) -> Result<u64, RepoError> {
        self.inner.delete_by_author(username).await
    }
}

#[tokio::test]
async fn failed_rename_cascade_surfaces_partial_with_account_already_renamed() {
    let posts_repo = Arc::new(RenameAlwaysFails::default());
    let accounts = AccountService::new(
        Arc::new(InMemoryAccountRepository::new()),
        posts_repo.clone(),
        Arc::new(Argon2PasswordService::new()),
    );
    let posts = PostService::new(posts_repo);

    let alice = accounts
        .register("alice".into(), "alice@example.com".into(), "pw".into())
        .await
        .unwrap();
    posts.create(new_post("alice", "Orphaned", &[])).await.unwrap();

    let changes = AccountChanges {
        username: Some("alice2".into()),
        ..AccountChanges::default()
    };
    let err = accounts
        .update_profile(alice.id, alice.id, changes)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Partial(_)));

    // the account record changed before the cascade failed, so the
    // inconsistency window is account renamed, posts left behind
    assert_eq!(accounts.get(alice.id).await.unwrap().username, "alice2");
    let stale = posts.list(PostFilter::Author("alice".into())).await.unwrap();
    assert_eq!(stale.len(), 1);
}

#[tokio::test]
async fn profile_update_rehashes_a_new_password() {
    let (accounts, _, _) = services();

    let alice = accounts
        .register("alice".into(), "alice@example.com".into(), "old-pw".into())
        .await
        .unwrap();

    let changes = AccountChanges {
        password: Some("new-pw".into()),
        ..AccountChanges::default()
    };
    accounts
        .update_profile(alice.id, alice.id, changes)
        .await
        .unwrap();

    accounts.authenticate("alice", "new-pw").await.unwrap();

    let stale = accounts.authenticate("alice", "old-pw").await.unwrap_err();
    assert!(matches!(stale, DomainError::InvalidCredentials));
}

#[tokio::test]
async fn end_to_end_scenario() {
    let (accounts, posts, _) = services();

    let bob = accounts
        .register("bob".into(), "bob@x.com".into(), "pw123".into())
        .await
        .unwrap();

    accounts.authenticate("bob", "pw123").await.unwrap();

    let wrong = accounts.authenticate("bob", "wrong").await.unwrap_err();
    assert!(matches!(wrong, DomainError::InvalidCredentials));

    let post = posts.create(new_post("bob", "T", &[])).await.unwrap();

    let forged = posts
        .update(post.id, "carol", PostChanges::default())
        .await
        .unwrap_err();
    assert!(matches!(forged, DomainError::Unauthorized));

    accounts.delete(bob.id, bob.id).await.unwrap();

    let remaining = posts.list(PostFilter::Author("bob".into())).await.unwrap();
    assert!(remaining.is_empty());
}
