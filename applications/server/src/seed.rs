/// Sample data for local development
use crate::{
    error::{Result, ServerError},
    services::AuthService,
};
use jukebox_core::{
    types::{CreatePlaylist, CreateUser, Playlist, User},
    Storage,
};

pub const SEED_USERNAME: &str = "testuser";
pub const SEED_PASSWORD: &str = "password123";
pub const SEED_TRACK_COUNT: usize = 20;
pub const SEED_PLAYLIST_NAME: &str = "Chill Playlist";
pub const SEED_PLAYLIST_DESCRIPTION: &str = "Relax and unwind";
/// Number of leading tracks attached to the seed playlist
pub const SEED_PLAYLIST_TRACKS: usize = 5;

#[derive(Debug)]
pub struct SeedSummary {
    pub user: User,
    pub track_count: usize,
    pub playlist: Playlist,
    /// Tracks attached to `playlist`
    pub playlist_track_count: usize,
}

/// Populate an empty database with one user, a batch of tracks and a playlist
///
/// The user is created first, so running this against an already seeded
/// database fails with `ServerError::UsernameTaken` before anything else
/// is written.
pub async fn run<S: Storage + ?Sized>(db: &S, auth: &AuthService) -> Result<SeedSummary> {
    let password_hash = auth.hash_password(SEED_PASSWORD).await?;
    let user = db
        .create_user(CreateUser {
            username: SEED_USERNAME.to_string(),
            password_hash,
        })
        .await
        .map_err(|e| {
            if e.is_duplicate() {
                ServerError::UsernameTaken
            } else {
                ServerError::from(e)
            }
        })?;
    tracing::info!(user_id = user.id, "Created user {}", user.username);

    let names = (1..=SEED_TRACK_COUNT)
        .map(|n| format!("Track {}", n))
        .collect();
    let tracks = db.create_tracks(names).await?;
    tracing::info!("Created {} tracks", tracks.len());

    let track_ids: Vec<_> = tracks
        .iter()
        .take(SEED_PLAYLIST_TRACKS)
        .map(|t| t.id)
        .collect();
    let playlist_track_count = track_ids.len();

    let playlist = db
        .create_playlist(CreatePlaylist {
            name: SEED_PLAYLIST_NAME.to_string(),
            description: Some(SEED_PLAYLIST_DESCRIPTION.to_string()),
            owner_id: user.id,
            track_ids,
        })
        .await?;
    tracing::info!(playlist_id = playlist.id, "Created playlist {}", playlist.name);

    Ok(SeedSummary {
        user,
        track_count: tracks.len(),
        playlist,
        playlist_track_count,
    })
}
