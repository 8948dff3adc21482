//! Row identifiers. All entities use SQLite integer primary keys.

/// User identifier
pub type UserId = i64;

/// Track identifier
pub type TrackId = i64;

/// Playlist identifier
pub type PlaylistId = i64;
