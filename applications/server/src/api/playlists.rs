/// Playlists API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use jukebox_core::{
    types::{CreatePlaylist, Playlist, PlaylistId, TrackId},
    Storage,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub track_ids: Vec<TrackId>,
}

/// GET /playlists
/// Playlists owned by the authenticated user
pub async fn list_playlists(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<Playlist>>> {
    let playlists = app_state.db.get_user_playlists(auth.user_id()).await?;
    Ok(Json(playlists))
}

/// POST /playlists
/// Create a playlist owned by the caller and attach the given tracks
pub async fn create_playlist(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<Json<Playlist>> {
    let playlist = app_state
        .db
        .create_playlist(CreatePlaylist {
            name: req.name,
            description: req.description,
            owner_id: auth.user_id(),
            track_ids: req.track_ids,
        })
        .await?;

    tracing::info!(
        playlist_id = playlist.id,
        owner_id = playlist.owner_id,
        "Created playlist"
    );

    Ok(Json(playlist))
}

/// GET /playlists/:id
/// Playlist with tracks; only the owner may read it
pub async fn get_playlist(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Playlist>> {
    // Missing and foreign playlists look the same to the caller
    let owned = app_state
        .db
        .get_playlist_by_id(id)
        .await?
        .is_some_and(|p| p.is_owned_by(auth.user_id()));
    if !owned {
        return Err(ServerError::Forbidden);
    }

    let playlist = app_state
        .db
        .get_playlist_with_tracks(id)
        .await?
        .ok_or(ServerError::Forbidden)?;

    Ok(Json(playlist))
}
