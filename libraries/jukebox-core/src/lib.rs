//! Jukebox Core
//!
//! Domain types, the storage trait and error handling shared by the
//! storage layer and the HTTP server.
//!
//! # Example
//!
//! ```rust
//! use jukebox_core::types::{CreatePlaylist, Track};
//!
//! let playlist = CreatePlaylist {
//!     name: "Chill Playlist".to_string(),
//!     description: Some("Relax and unwind".to_string()),
//!     owner_id: 1,
//!     track_ids: vec![1, 2, 3],
//! };
//! assert_eq!(playlist.track_ids.len(), 3);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;

pub use error::{JukeboxError, Result};
pub use storage::Storage;

pub use types::{
    CreatePlaylist, CreateUser, Playlist, PlaylistId, PlaylistTrack, Track, TrackId, User,
    UserCredentials, UserId,
};
