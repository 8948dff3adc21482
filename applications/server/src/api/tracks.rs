/// Tracks API routes
use crate::{
    error::Result,
    middleware::MaybeAuthenticatedUser,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use jukebox_core::{
    types::{Track, TrackId},
    JukeboxError, Storage,
};

/// GET /tracks
pub async fn list_tracks(State(app_state): State<AppState>) -> Result<Json<Vec<Track>>> {
    let tracks = app_state.db.get_all_tracks().await?;
    Ok(Json(tracks))
}

/// GET /tracks/:id
/// Authenticated callers also see which of their playlists contain the track
pub async fn get_track(
    Path(id): Path<TrackId>,
    State(app_state): State<AppState>,
    MaybeAuthenticatedUser(user): MaybeAuthenticatedUser,
) -> Result<Json<Track>> {
    let track = app_state
        .db
        .get_track_by_id(id)
        .await?
        .ok_or_else(|| JukeboxError::not_found("Track", id))?;

    let track = match user {
        Some(user) => {
            let playlists = app_state.db.get_track_playlists(id, user.id).await?;
            track.with_playlists(playlists)
        }
        None => track,
    };

    Ok(Json(track))
}
