//! Error types shared across the player.
//!
//! Load errors are fatal at startup, playback errors for a single entry are
//! recovered by skipping, and input errors are only ever reported.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::input::Key;
use crate::transport::Skipped;

/// Failure to turn a playlist file into a non-empty `Playlist`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open playlist {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read playlist {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no playable entries in {}", path.display())]
    Empty { path: PathBuf },
}

/// Failure reported by the audio backend.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("playlist has no entry {0}")]
    NoSuchEntry(usize),

    #[error("audio output unavailable: {0}")]
    Engine(String),

    /// Every entry failed once in a row while skipping.
    #[error("none of the {} playlist entries could be played", skipped.len())]
    NothingPlayable { skipped: Vec<Skipped> },
}

/// A keypress that does not map to any command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown key {0:?}")]
    UnknownKey(Key),
}

/// Everything that can end `runtime::run` early.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
