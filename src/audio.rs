//! Audio backend boundary.
//!
//! Decoding and device output belong to `rodio`. The rest of the player only
//! sees the `AudioBackend` / `Sound` traits: open a path, start, pause, ask
//! whether it is still playing, drop to release.

mod backend;
mod rodio_backend;

#[cfg(test)]
pub mod mock;

pub use backend::{AudioBackend, Sound};
pub use rodio_backend::RodioBackend;
