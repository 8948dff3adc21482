//! Playlist types

use super::{
    ids::{PlaylistId, TrackId, UserId},
    track::Track,
};
use serde::{Deserialize, Serialize};

/// Playlist owned by a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: UserId,
    pub created_at: String,

    /// Tracks in playlist (optional, populated when requested)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<PlaylistTrack>>,
}

impl Playlist {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Data for creating a new playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: UserId,

    /// Tracks to attach, in order
    pub track_ids: Vec<TrackId>,
}

impl CreatePlaylist {
    /// Track ids with repeats removed, keeping first-seen order
    pub fn unique_track_ids(&self) -> Vec<TrackId> {
        let mut seen = std::collections::HashSet::new();
        self.track_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

/// Join row between a playlist and a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistTrack {
    pub track_id: TrackId,
    pub position: i64,
    pub added_at: String,
    pub track: Track,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_playlist() -> Playlist {
        Playlist {
            id: 3,
            name: "Chill Playlist".to_string(),
            description: Some("Relax and unwind".to_string()),
            owner_id: 1,
            created_at: "2025-01-01 00:00:00".to_string(),
            tracks: None,
        }
    }

    #[test]
    fn test_unique_track_ids_keeps_first_seen_order() {
        let create = CreatePlaylist {
            name: "Mix".to_string(),
            description: None,
            owner_id: 1,
            track_ids: vec![4, 2, 4, 9, 2],
        };
        assert_eq!(create.unique_track_ids(), vec![4, 2, 9]);
    }

    #[test]
    fn test_playlist_serializes_camel_case_without_tracks() {
        let json = serde_json::to_value(sample_playlist()).unwrap();
        assert_eq!(json["ownerId"], 1);
        assert_eq!(json["createdAt"], "2025-01-01 00:00:00");
        assert!(json.get("tracks").is_none());
    }

    #[test]
    fn test_playlist_serializes_nested_tracks() {
        let mut playlist = sample_playlist();
        playlist.tracks = Some(vec![PlaylistTrack {
            track_id: 5,
            position: 0,
            added_at: "2025-01-01 00:00:00".to_string(),
            track: Track {
                id: 5,
                name: "Track 5".to_string(),
                created_at: "2025-01-01 00:00:00".to_string(),
                playlists: None,
            },
        }]);

        let json = serde_json::to_value(&playlist).unwrap();
        assert_eq!(json["tracks"][0]["trackId"], 5);
        assert_eq!(json["tracks"][0]["track"]["name"], "Track 5");
    }

    #[test]
    fn test_ownership() {
        let playlist = sample_playlist();
        assert!(playlist.is_owned_by(1));
        assert!(!playlist.is_owned_by(2));
    }
}
