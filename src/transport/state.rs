use std::fmt;
use std::path::PathBuf;

use crate::config::LoopModeSetting;
use crate::error::PlaybackError;

/// Where the transport is in its lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TransportState {
    /// Nothing has played yet, or the last play attempt failed.
    #[default]
    Idle,
    Playing,
    Paused,
    /// Explicitly stopped, or ran off the end in `NoLoop` mode.
    Stopped,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LoopMode {
    /// Stop after the last track of the current order.
    NoLoop,
    /// Wrap around to the start of the current order.
    #[default]
    LoopAll,
    /// Repeat the current track when it ends.
    LoopOne,
}

impl From<LoopModeSetting> for LoopMode {
    fn from(s: LoopModeSetting) -> Self {
        match s {
            LoopModeSetting::NoLoop => Self::NoLoop,
            LoopModeSetting::LoopAll => Self::LoopAll,
            LoopModeSetting::LoopOne => Self::LoopOne,
        }
    }
}

impl fmt::Display for LoopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoLoop => "no loop",
            Self::LoopAll => "loop all",
            Self::LoopOne => "loop one",
        })
    }
}

/// Which way playback moves past entries that cannot be opened.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// An entry that was skipped because it could not be played.
#[derive(Debug)]
pub struct Skipped {
    pub index: usize,
    pub error: PlaybackError,
}

/// Result of a successful `play`: which entry is sounding now and what was
/// skipped on the way there.
#[derive(Debug)]
pub struct Started {
    pub index: usize,
    pub path: PathBuf,
    pub skipped: Vec<Skipped>,
}

#[derive(Debug)]
pub enum PauseToggle {
    Paused,
    Resumed,
    /// Nothing was loaded, so the current entry was started.
    Started(Started),
}

#[derive(Debug)]
pub enum Advance {
    Started(Started),
    /// `NoLoop` reached the end of the order; the transport is stopped.
    /// `skipped` lists unplayable entries passed on the way to the end.
    EndOfPlaylist { skipped: Vec<Skipped> },
}
