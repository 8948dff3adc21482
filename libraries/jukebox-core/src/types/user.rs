//! User domain types

use super::ids::UserId;
use serde::{Deserialize, Serialize};

/// A registered user. The password hash lives in [`UserCredentials`] and is
/// never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,

    /// Account creation timestamp (SQLite `datetime('now')`, UTC)
    pub created_at: String,
}

/// User together with the stored password hash, used for login only
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Data for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,

    /// Already-hashed password
    pub password_hash: String,
}
