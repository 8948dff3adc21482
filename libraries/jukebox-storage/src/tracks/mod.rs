//! Track catalogue queries

use jukebox_core::{error::Result, types::*, JukeboxError};
use sqlx::{sqlite::SqliteRow, QueryBuilder, Row, Sqlite, SqlitePool};

pub(crate) fn row_to_track(row: &SqliteRow) -> Track {
    Track {
        id: row.get("id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
        playlists: None,
    }
}

/// Get all tracks in storage order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Track>> {
    let rows = sqlx::query("SELECT id, name, created_at FROM tracks ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(row_to_track).collect())
}

/// Get track by ID
pub async fn get_by_id(pool: &SqlitePool, id: TrackId) -> Result<Option<Track>> {
    let row = sqlx::query("SELECT id, name, created_at FROM tracks WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(row_to_track))
}

/// Create a single track
pub async fn create(pool: &SqlitePool, name: &str) -> Result<Track> {
    let result = sqlx::query("INSERT INTO tracks (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await?;

    get_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| JukeboxError::storage("Failed to retrieve created track"))
}

/// Insert many tracks in one transaction
///
/// Returns the created tracks in the order of `names`.
pub async fn create_many(pool: &SqlitePool, names: &[String]) -> Result<Vec<Track>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let mut tx = pool.begin().await?;

    for chunk in names.chunks(crate::INSERT_BATCH_ROWS) {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("INSERT INTO tracks (name) ");
        builder.push_values(chunk, |mut b, name| {
            b.push_bind(name);
        });
        builder.build().execute(&mut *tx).await?;
    }

    // Rowids are assigned sequentially inside the transaction
    let rows = sqlx::query("SELECT id, name, created_at FROM tracks ORDER BY id DESC LIMIT ?")
        .bind(names.len() as i64)
        .fetch_all(&mut *tx)
        .await?;

    tx.commit().await?;

    let mut tracks: Vec<Track> = rows.iter().map(row_to_track).collect();
    tracks.reverse();
    Ok(tracks)
}

/// Return the subset of `ids` that has no matching track, in input order
///
/// The ids travel as a single JSON array bind, so the list length is not
/// bounded by SQLite's host parameter limit.
pub async fn find_missing<'e, E>(executor: E, ids: &[TrackId]) -> Result<Vec<TrackId>>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let ids_json = format!(
        "[{}]",
        ids.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    );

    let missing = sqlx::query_scalar::<_, TrackId>(
        r"
        SELECT j.value
        FROM json_each(?) AS j
        WHERE NOT EXISTS (SELECT 1 FROM tracks t WHERE t.id = j.value)
        ORDER BY j.key
        ",
    )
    .bind(ids_json)
    .fetch_all(executor)
    .await?;

    Ok(missing)
}

/// Count tracks
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM tracks")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
