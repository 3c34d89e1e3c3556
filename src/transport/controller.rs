use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::audio::{AudioBackend, Sound};
use crate::error::PlaybackError;
use crate::playlist::{PlayOrder, Playlist};

use super::state::{
    Advance, Direction, LoopMode, PauseToggle, Skipped, Started, TransportState,
};

/// Owns the playlist position, the play order and the one live sound.
pub struct Transport<B: AudioBackend> {
    // Declared first so it is dropped before the backend that created it.
    handle: Option<B::Sound>,
    backend: B,
    playlist: Playlist,
    order: PlayOrder,
    loop_mode: LoopMode,
    current: usize,
    state: TransportState,
}

impl<B: AudioBackend> Transport<B> {
    pub fn new(backend: B, playlist: Playlist) -> Self {
        let order = PlayOrder::new(playlist.len());
        Self {
            handle: None,
            backend,
            playlist,
            order,
            loop_mode: LoopMode::default(),
            current: 0,
            state: TransportState::Idle,
        }
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn order(&self) -> &PlayOrder {
        &self.order
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    pub fn set_loop_mode(&mut self, mode: LoopMode) {
        self.loop_mode = mode;
    }

    /// Whether a sound is currently open.
    #[cfg(test)]
    pub(crate) fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    /// Open and start `index` once, without skipping on failure.
    ///
    /// The previous sound is always released first; on error nothing is open
    /// and the transport is `Idle`.
    pub fn try_play(&mut self, index: usize) -> Result<PathBuf, PlaybackError> {
        self.release();
        self.state = TransportState::Idle;

        let path = self
            .playlist
            .resolve(index)
            .ok_or(PlaybackError::NoSuchEntry(index))?;
        self.current = index;

        let mut sound = self.backend.open(&path)?;
        sound.start();
        self.handle = Some(sound);
        self.state = TransportState::Playing;
        info!(index, path = %path.display(), "playing");
        Ok(path)
    }

    /// Play `index`, skipping forward through the active order past entries
    /// that cannot be played.
    ///
    /// Gives up after every entry failed once in a row, leaving the
    /// transport `Idle`.
    pub fn play(&mut self, index: usize) -> Result<Started, PlaybackError> {
        self.play_toward(index, Direction::Forward)
    }

    /// Like `play`, but unplayable entries are skipped in `direction`.
    pub fn play_toward(
        &mut self,
        index: usize,
        direction: Direction,
    ) -> Result<Started, PlaybackError> {
        match self.play_until(index, direction, None)? {
            Advance::Started(started) => Ok(started),
            // Without a stop point the skip only ends by running out of entries.
            Advance::EndOfPlaylist { skipped } => {
                Err(PlaybackError::NothingPlayable { skipped })
            }
        }
    }

    pub fn next(&mut self) -> Result<Started, PlaybackError> {
        let index = self.order.next_after(self.current);
        self.play_toward(index, Direction::Forward)
    }

    pub fn prev(&mut self) -> Result<Started, PlaybackError> {
        let index = self.order.prev_before(self.current);
        self.play_toward(index, Direction::Backward)
    }

    pub fn toggle_pause(&mut self) -> Result<PauseToggle, PlaybackError> {
        match (self.state, self.handle.as_mut()) {
            (TransportState::Playing, Some(sound)) => {
                sound.stop();
                self.state = TransportState::Paused;
                debug!("paused");
                Ok(PauseToggle::Paused)
            }
            (TransportState::Paused, Some(sound)) => {
                sound.start();
                self.state = TransportState::Playing;
                debug!("resumed");
                Ok(PauseToggle::Resumed)
            }
            _ => self.play(self.current).map(PauseToggle::Started),
        }
    }

    /// Flip shuffle. The current track keeps playing; only what comes next
    /// changes. Returns the new shuffle state.
    pub fn toggle_shuffle(&mut self) -> bool {
        let on = self.order.toggle();
        debug!(shuffle = on, "shuffle toggled");
        on
    }

    /// Cycle `NoLoop -> LoopAll -> LoopOne -> NoLoop`.
    pub fn cycle_loop_mode(&mut self) -> LoopMode {
        self.loop_mode = match self.loop_mode {
            LoopMode::NoLoop => LoopMode::LoopAll,
            LoopMode::LoopAll => LoopMode::LoopOne,
            LoopMode::LoopOne => LoopMode::NoLoop,
        };
        debug!(loop_mode = %self.loop_mode, "loop mode changed");
        self.loop_mode
    }

    pub fn stop_all(&mut self) {
        self.release();
        self.state = TransportState::Stopped;
        debug!("stopped");
    }

    /// True once the playing sound has run out on its own.
    pub fn poll_finished(&self) -> bool {
        self.state == TransportState::Playing
            && self.handle.as_ref().is_none_or(|sound| !sound.is_playing())
    }

    /// Move on after a track ended naturally, according to the loop mode.
    pub fn advance_after_finish(&mut self) -> Result<Advance, PlaybackError> {
        match self.loop_mode {
            LoopMode::LoopOne => self.play(self.current).map(Advance::Started),
            LoopMode::LoopAll => self.next().map(Advance::Started),
            LoopMode::NoLoop if self.current == self.order.last() => {
                self.stop_all();
                Ok(Advance::EndOfPlaylist {
                    skipped: Vec::new(),
                })
            }
            LoopMode::NoLoop => {
                let index = self.order.next_after(self.current);
                let last = self.order.last();
                self.play_until(index, Direction::Forward, Some(last))
            }
        }
    }

    /// Try `index`, then keep moving in `direction` while entries fail.
    ///
    /// When `stop_after` fails too, the transport stops and reports the end
    /// of the playlist instead of wrapping around.
    fn play_until(
        &mut self,
        index: usize,
        direction: Direction,
        stop_after: Option<usize>,
    ) -> Result<Advance, PlaybackError> {
        let len = self.playlist.len();
        let mut candidate = index.min(len - 1);
        let mut skipped = Vec::new();

        for _ in 0..len {
            let error = match self.try_play(candidate) {
                Ok(path) => {
                    return Ok(Advance::Started(Started {
                        index: candidate,
                        path,
                        skipped,
                    }));
                }
                Err(error) => error,
            };

            warn!(index = candidate, %error, "skipping entry");
            skipped.push(Skipped {
                index: candidate,
                error,
            });

            if stop_after == Some(candidate) {
                self.stop_all();
                return Ok(Advance::EndOfPlaylist { skipped });
            }
            candidate = match direction {
                Direction::Forward => self.order.next_after(candidate),
                Direction::Backward => self.order.prev_before(candidate),
            };
        }

        Err(PlaybackError::NothingPlayable { skipped })
    }

    fn release(&mut self) {
        if self.handle.take().is_some() {
            debug!(index = self.current, "sound released");
        }
    }
}
