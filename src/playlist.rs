//! Playlist loading, play order and per-track display info.
//!
//! A playlist is a plain text file with one path per line. It is read once at
//! startup and never changes afterwards; shuffling only permutes a separate
//! index order.

mod info;
mod load;
mod model;
mod order;

pub use info::TrackInfo;
pub use load::{load_playlist, parse_playlist};
pub use model::{Playlist, PlaylistEntry};
pub use order::PlayOrder;
