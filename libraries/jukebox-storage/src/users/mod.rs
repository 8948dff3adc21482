//! User management and credential queries

use jukebox_core::{error::Result, types::*, JukeboxError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn row_to_user(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        created_at: row.get("created_at"),
    }
}

/// Create a new user
///
/// # Errors
///
/// Returns `JukeboxError::Duplicate` if the username already exists
pub async fn create(pool: &SqlitePool, user: CreateUser) -> Result<User> {
    if user.username.trim().is_empty() {
        return Err(JukeboxError::invalid_input("Username must not be empty"));
    }

    let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
        .bind(&user.username)
        .bind(&user.password_hash)
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();
    tracing::debug!(user_id = id, "Created user {}", user.username);

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| JukeboxError::storage("Failed to retrieve created user"))
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(row_to_user))
}

/// Get user with password hash for authentication
///
/// Returns `None` if no user has this username
pub async fn get_credentials(pool: &SqlitePool, username: &str) -> Result<Option<UserCredentials>> {
    let row = sqlx::query(
        "SELECT id, username, created_at, password_hash FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| UserCredentials {
        user: row_to_user(&row),
        password_hash: row.get("password_hash"),
    }))
}

/// Get all users
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, username, created_at FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(row_to_user).collect())
}

/// Count users
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
