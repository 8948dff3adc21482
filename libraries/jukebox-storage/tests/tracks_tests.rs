//! Integration tests for the tracks vertical slice

mod test_helpers;

use jukebox_core::types::TrackId;
use test_helpers::*;

#[tokio::test]
async fn test_create_many_returns_tracks_in_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let names: Vec<String> = (1..=20).map(|i| format!("Track {}", i)).collect();
    let tracks = jukebox_storage::tracks::create_many(pool, &names)
        .await
        .expect("Failed to create tracks");

    assert_eq!(tracks.len(), 20);
    assert_eq!(tracks[0].name, "Track 1");
    assert_eq!(tracks[19].name, "Track 20");
    assert!(tracks.windows(2).all(|w| w[0].id < w[1].id));

    assert_eq!(jukebox_storage::tracks::count(pool).await.unwrap(), 20);
}

#[tokio::test]
async fn test_create_many_empty_is_noop() {
    let test_db = TestDb::new().await;

    let tracks = jukebox_storage::tracks::create_many(test_db.pool(), &[])
        .await
        .unwrap();
    assert!(tracks.is_empty());
}

#[tokio::test]
async fn test_get_all_and_get_by_id() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = create_test_track(pool, "Intro").await;
    let second = create_test_track(pool, "Outro").await;

    let all = jukebox_storage::tracks::get_all(pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first);
    assert_eq!(all[1].id, second);

    let track = jukebox_storage::tracks::get_by_id(pool, second)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(track.name, "Outro");
    assert!(track.playlists.is_none());

    let missing = jukebox_storage::tracks::get_by_id(pool, second + 100)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_missing() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let a = create_test_track(pool, "A").await;
    let b = create_test_track(pool, "B").await;

    let missing = jukebox_storage::tracks::find_missing(pool, &[a, 404, b, 405])
        .await
        .unwrap();
    assert_eq!(missing, vec![404, 405]);

    let none = jukebox_storage::tracks::find_missing(pool, &[a, b])
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_create_many_beyond_single_statement() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let names: Vec<String> = (1..=40_000).map(|i| format!("Track {}", i)).collect();
    let tracks = jukebox_storage::tracks::create_many(pool, &names)
        .await
        .unwrap();

    assert_eq!(tracks.len(), 40_000);
    assert_eq!(tracks[39_999].name, "Track 40000");
    assert_eq!(jukebox_storage::tracks::count(pool).await.unwrap(), 40_000);

    let ids: Vec<TrackId> = tracks.iter().map(|t| t.id).collect();
    let missing = jukebox_storage::tracks::find_missing(pool, &ids)
        .await
        .unwrap();
    assert!(missing.is_empty());
}
