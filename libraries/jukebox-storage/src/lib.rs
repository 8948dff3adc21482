//! Jukebox Storage
//!
//! `SQLite` persistence for users, tracks and playlists.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each entity owns its own queries (`users`, `tracks`, `playlists`)
//! - **Embedded migrations**: the schema ships inside the binary
//! - [`SqliteStorage`] implements [`jukebox_core::Storage`] by delegating to the slices
//!
//! # Example
//!
//! ```rust,no_run
//! use jukebox_core::Storage;
//! use jukebox_storage::{create_pool, run_migrations, SqliteStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://jukebox.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = SqliteStorage::new(pool);
//! let tracks = storage.get_all_tracks().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod playlists;
pub mod tracks;
pub mod users;

pub use context::SqliteStorage;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

/// Rows per multi-row INSERT; keeps each statement well under SQLite's
/// host parameter limit
pub(crate) const INSERT_BATCH_ROWS: usize = 300;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://jukebox.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("Pool created");

    Ok(pool)
}
