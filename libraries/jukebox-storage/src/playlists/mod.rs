//! Playlist queries. Ownership is enforced by callers, not here.

use crate::tracks;
use jukebox_core::{error::Result, types::*, JukeboxError};
use sqlx::{sqlite::SqliteRow, QueryBuilder, Row, Sqlite, SqlitePool};

fn row_to_playlist(row: &SqliteRow) -> Playlist {
    Playlist {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        owner_id: row.get("owner_id"),
        created_at: row.get("created_at"),
        tracks: None,
    }
}

/// Get playlists owned by a user
pub async fn get_user_playlists(pool: &SqlitePool, owner_id: UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT id, name, description, owner_id, created_at
        FROM playlists
        WHERE owner_id = ?
        ORDER BY id
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_playlist).collect())
}

/// Get playlist by ID
///
/// No ownership check happens here; callers decide who may see it.
pub async fn get_by_id(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        "SELECT id, name, description, owner_id, created_at FROM playlists WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(row_to_playlist))
}

/// Get the tracks of a playlist, ordered by position
pub async fn get_tracks(pool: &SqlitePool, id: PlaylistId) -> Result<Vec<PlaylistTrack>> {
    let rows = sqlx::query(
        r#"
        SELECT
            pt.track_id, pt.position, pt.added_at,
            t.id, t.name, t.created_at
        FROM playlist_tracks pt
        INNER JOIN tracks t ON pt.track_id = t.id
        WHERE pt.playlist_id = ?
        ORDER BY pt.position
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| PlaylistTrack {
            track_id: row.get("track_id"),
            position: row.get("position"),
            added_at: row.get("added_at"),
            track: tracks::row_to_track(row),
        })
        .collect())
}

/// Get playlist with all tracks
pub async fn get_with_tracks(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    let Some(mut playlist) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    playlist.tracks = Some(get_tracks(pool, id).await?);

    Ok(Some(playlist))
}

/// Create new playlist and attach its tracks
///
/// Every track id is checked before anything is written. Repeated ids are
/// attached once. The whole operation runs in one transaction.
///
/// # Errors
///
/// Returns `JukeboxError::InvalidReference` listing unknown track ids
pub async fn create(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<Playlist> {
    if playlist.name.trim().is_empty() {
        return Err(JukeboxError::invalid_input("Playlist name must not be empty"));
    }

    let track_ids = playlist.unique_track_ids();

    let mut tx = pool.begin().await?;

    let missing = tracks::find_missing(&mut *tx, &track_ids).await?;
    if !missing.is_empty() {
        return Err(JukeboxError::invalid_reference("Track", missing));
    }

    let result = sqlx::query("INSERT INTO playlists (name, description, owner_id) VALUES (?, ?, ?)")
        .bind(&playlist.name)
        .bind(&playlist.description)
        .bind(playlist.owner_id)
        .execute(&mut *tx)
        .await?;

    let id = result.last_insert_rowid();

    for (batch, chunk) in track_ids.chunks(crate::INSERT_BATCH_ROWS).enumerate() {
        let offset = batch * crate::INSERT_BATCH_ROWS;
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("INSERT INTO playlist_tracks (playlist_id, track_id, position) ");
        builder.push_values(chunk.iter().enumerate(), |mut b, (i, track_id)| {
            b.push_bind(id)
                .push_bind(*track_id)
                .push_bind((offset + i) as i64);
        });
        builder.build().execute(&mut *tx).await?;
    }

    tx.commit().await?;

    tracing::debug!(
        playlist_id = id,
        tracks = track_ids.len(),
        "Created playlist {}",
        playlist.name
    );

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| JukeboxError::storage("Failed to retrieve created playlist"))
}

/// Playlists owned by `owner_id` that contain `track_id`
pub async fn get_containing_track(
    pool: &SqlitePool,
    track_id: TrackId,
    owner_id: UserId,
) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT p.id, p.name, p.description, p.owner_id, p.created_at
        FROM playlists p
        INNER JOIN playlist_tracks pt ON pt.playlist_id = p.id
        WHERE pt.track_id = ? AND p.owner_id = ?
        ORDER BY p.id
        "#,
    )
    .bind(track_id)
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_playlist).collect())
}

/// Count join rows for a playlist
pub async fn count_tracks(pool: &SqlitePool, id: PlaylistId) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM playlist_tracks WHERE playlist_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Count playlists
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM playlists")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
