mod ids;
mod playlist;
mod track;
mod user;

pub use ids::{PlaylistId, TrackId, UserId};
pub use playlist::{CreatePlaylist, Playlist, PlaylistTrack};
pub use track::Track;
pub use user::{CreateUser, User, UserCredentials};
