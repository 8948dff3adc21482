//! Storage trait implemented by the persistence layer

use crate::error::Result;
use crate::types::{
    CreatePlaylist, CreateUser, Playlist, PlaylistId, Track, TrackId, User, UserCredentials,
    UserId,
};
use async_trait::async_trait;

/// Data access operations used by the HTTP layer and the seed utility
#[async_trait]
pub trait Storage: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// Create a user. Fails with `JukeboxError::Duplicate` when the username is taken.
    async fn create_user(&self, user: CreateUser) -> Result<User>;

    /// Get user by ID
    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Get user and password hash by username
    async fn get_credentials(&self, username: &str) -> Result<Option<UserCredentials>>;

    /// Get all users
    async fn get_all_users(&self) -> Result<Vec<User>>;

    // ========================================================================
    // Tracks
    // ========================================================================

    /// Get all tracks in storage order
    async fn get_all_tracks(&self) -> Result<Vec<Track>>;

    /// Get track by ID
    async fn get_track_by_id(&self, id: TrackId) -> Result<Option<Track>>;

    /// Insert many tracks at once, returning them in insertion order
    async fn create_tracks(&self, names: Vec<String>) -> Result<Vec<Track>>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Playlists owned by `owner_id`
    async fn get_user_playlists(&self, owner_id: UserId) -> Result<Vec<Playlist>>;

    /// Get playlist by ID without tracks
    async fn get_playlist_by_id(&self, id: PlaylistId) -> Result<Option<Playlist>>;

    /// Get playlist with its tracks, ordered by position
    async fn get_playlist_with_tracks(&self, id: PlaylistId) -> Result<Option<Playlist>>;

    /// Create a playlist and attach its tracks atomically.
    /// Fails with `JukeboxError::InvalidReference` if any track id is unknown.
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist>;

    /// Playlists owned by `owner_id` that contain `track_id`
    async fn get_track_playlists(&self, track_id: TrackId, owner_id: UserId)
        -> Result<Vec<Playlist>>;
}
