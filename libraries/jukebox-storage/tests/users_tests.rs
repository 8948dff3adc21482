//! Integration tests for the users vertical slice

mod test_helpers;

use jukebox_core::{types::*, JukeboxError};
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_user() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = jukebox_storage::users::create(
        pool,
        CreateUser {
            username: "alice".to_string(),
            password_hash: "$2b$10$hash".to_string(),
        },
    )
    .await
    .expect("Failed to create user");

    assert_eq!(user.username, "alice");
    assert!(!user.created_at.is_empty());

    let retrieved = jukebox_storage::users::get_by_id(pool, user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(retrieved, user);
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_user(pool, "alice").await;

    let result = jukebox_storage::users::create(
        pool,
        CreateUser {
            username: "alice".to_string(),
            password_hash: "other".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(JukeboxError::Duplicate(_))));
    assert_eq!(jukebox_storage::users::count(pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_empty_username_is_rejected() {
    let test_db = TestDb::new().await;

    let result = jukebox_storage::users::create(
        test_db.pool(),
        CreateUser {
            username: "   ".to_string(),
            password_hash: "hash".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(JukeboxError::InvalidInput(_))));
}

#[tokio::test]
async fn test_get_credentials() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    jukebox_storage::users::create(
        pool,
        CreateUser {
            username: "bob".to_string(),
            password_hash: "stored-hash".to_string(),
        },
    )
    .await
    .unwrap();

    let credentials = jukebox_storage::users::get_credentials(pool, "bob")
        .await
        .unwrap()
        .expect("credentials should exist");
    assert_eq!(credentials.user.username, "bob");
    assert_eq!(credentials.password_hash, "stored-hash");

    let missing = jukebox_storage::users::get_credentials(pool, "nobody")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_get_missing_user_returns_none() {
    let test_db = TestDb::new().await;

    let user = jukebox_storage::users::get_by_id(test_db.pool(), 999)
        .await
        .unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_get_all_users_in_id_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_user(pool, "charlie").await;
    create_test_user(pool, "alice").await;

    let users = jukebox_storage::users::get_all(pool).await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["charlie", "alice"]);
}
