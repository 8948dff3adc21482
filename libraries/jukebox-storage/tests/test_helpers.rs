//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! so migrations, constraints and foreign keys behave as in production.

#![allow(dead_code)]

use jukebox_core::types::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = jukebox_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        jukebox_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: Create a test user
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> UserId {
    jukebox_storage::users::create(
        pool,
        CreateUser {
            username: username.to_string(),
            password_hash: "not-a-real-hash".to_string(),
        },
    )
    .await
    .expect("Failed to create test user")
    .id
}

/// Test fixture: Create a test track
pub async fn create_test_track(pool: &SqlitePool, name: &str) -> TrackId {
    jukebox_storage::tracks::create(pool, name)
        .await
        .expect("Failed to create test track")
        .id
}

/// Test fixture: Create a playlist with the given tracks
pub async fn create_test_playlist(
    pool: &SqlitePool,
    name: &str,
    owner_id: UserId,
    track_ids: Vec<TrackId>,
) -> PlaylistId {
    jukebox_storage::playlists::create(
        pool,
        CreatePlaylist {
            name: name.to_string(),
            description: None,
            owner_id,
            track_ids,
        },
    )
    .await
    .expect("Failed to create test playlist")
    .id
}
