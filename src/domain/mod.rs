pub mod playlist;
pub mod track;

pub use playlist::PlaylistId;
pub use track::Track;
