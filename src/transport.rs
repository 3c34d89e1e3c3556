//! Transport control: play / pause / next / prev / stop over the playlist.
//!
//! `Transport` is an explicit state machine (`Idle`, `Playing`, `Paused`,
//! `Stopped`) holding at most one open sound at any time.

mod controller;
mod state;

pub use controller::Transport;
pub use state::*;

#[cfg(test)]
mod tests;
