//! Track types

use super::{ids::TrackId, playlist::Playlist};
use serde::{Deserialize, Serialize};

/// A track in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub created_at: String,

    /// Caller's playlists containing this track (populated for authenticated lookups)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlists: Option<Vec<Playlist>>,
}

impl Track {
    /// Attach the playlists that contain this track
    pub fn with_playlists(mut self, playlists: Vec<Playlist>) -> Self {
        self.playlists = Some(playlists);
        self
    }
}
