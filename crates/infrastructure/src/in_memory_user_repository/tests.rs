use userdir_application::UserRepository;
use userdir_domain::UserId;

use super::InMemoryUserRepository;

#[tokio::test]
async fn insert_assigns_sequential_ids() {
    let repo = InMemoryUserRepository::new();

    let first = repo.insert("Ada", "ada@example.com").await;
    let second = repo.insert("Grace", "grace@example.com").await;

    match (first, second) {
        (Ok(first), Ok(second)) => {
            assert_eq!(first.id.as_i64(), 1);
            assert_eq!(second.id.as_i64(), 2);
        }
        other => panic!("inserts failed: {other:?}"),
    }
}

#[tokio::test]
async fn find_all_lists_every_inserted_user_once() {
    let repo = InMemoryUserRepository::new();
    let _ = repo.insert("Ada", "ada@example.com").await;
    let _ = repo.insert("Grace", "grace@example.com").await;
    let _ = repo.insert("Edsger", "edsger@example.com").await;

    let users = repo.find_all().await.unwrap_or_default();

    let ids: Vec<i64> = users.iter().map(|user| user.id.as_i64()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn find_all_on_empty_store_is_empty() {
    let repo = InMemoryUserRepository::new();
    assert!(repo.find_all().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn find_by_id_returns_stored_record() {
    let repo = InMemoryUserRepository::new();
    let _ = repo.insert("Ada", "ada@example.com").await;
    let _ = repo.insert("Grace", "grace@example.com").await;

    let found = repo.find_by_id(UserId::from_i64(2)).await.ok().flatten();

    match found {
        Some(user) => assert_eq!(user.email, "grace@example.com"),
        None => panic!("expected user 2 to be present"),
    }
}

#[tokio::test]
async fn find_by_id_on_absent_id_is_none() {
    let repo = InMemoryUserRepository::new();
    let _ = repo.insert("Ada", "ada@example.com").await;

    let found = repo.find_by_id(UserId::from_i64(42)).await.ok().flatten();
    assert!(found.is_none());
}
