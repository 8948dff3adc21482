use crate::{error::Result, playlists, tracks, users};
use async_trait::async_trait;
use jukebox_core::{types::*, Storage};
use sqlx::SqlitePool;

/// `SQLite`-backed implementation of [`Storage`]
///
/// Cloning is cheap; clones share the same pool.
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database at `database_url` and bring the schema up to date
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    // Users
    async fn create_user(&self, user: CreateUser) -> jukebox_core::Result<User> {
        users::create(&self.pool, user).await
    }

    async fn get_user_by_id(&self, id: UserId) -> jukebox_core::Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn get_credentials(
        &self,
        username: &str,
    ) -> jukebox_core::Result<Option<UserCredentials>> {
        users::get_credentials(&self.pool, username).await
    }

    async fn get_all_users(&self) -> jukebox_core::Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    // Tracks
    async fn get_all_tracks(&self) -> jukebox_core::Result<Vec<Track>> {
        tracks::get_all(&self.pool).await
    }

    async fn get_track_by_id(&self, id: TrackId) -> jukebox_core::Result<Option<Track>> {
        tracks::get_by_id(&self.pool, id).await
    }

    async fn create_tracks(&self, names: Vec<String>) -> jukebox_core::Result<Vec<Track>> {
        tracks::create_many(&self.pool, &names).await
    }

    // Playlists
    async fn get_user_playlists(&self, owner_id: UserId) -> jukebox_core::Result<Vec<Playlist>> {
        playlists::get_user_playlists(&self.pool, owner_id).await
    }

    async fn get_playlist_by_id(&self, id: PlaylistId) -> jukebox_core::Result<Option<Playlist>> {
        playlists::get_by_id(&self.pool, id).await
    }

    async fn get_playlist_with_tracks(
        &self,
        id: PlaylistId,
    ) -> jukebox_core::Result<Option<Playlist>> {
        playlists::get_with_tracks(&self.pool, id).await
    }

    async fn create_playlist(&self, playlist: CreatePlaylist) -> jukebox_core::Result<Playlist> {
        playlists::create(&self.pool, playlist).await
    }

    async fn get_track_playlists(
        &self,
        track_id: TrackId,
        owner_id: UserId,
    ) -> jukebox_core::Result<Vec<Playlist>> {
        playlists::get_containing_track(&self.pool, track_id, owner_id).await
    }
}
