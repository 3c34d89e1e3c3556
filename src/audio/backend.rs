use std::path::Path;

use crate::error::PlaybackError;

/// An audio engine that can open playable sounds.
///
/// Creating the engine is "init"; dropping it is "uninit".
pub trait AudioBackend {
    type Sound: Sound;

    /// Open and prepare `path` for playback. The returned sound is paused.
    fn open(&mut self, path: &Path) -> Result<Self::Sound, PlaybackError>;
}

/// One open decode/playback session. Dropping it releases it.
pub trait Sound {
    /// Start or resume output.
    fn start(&mut self);
    /// Pause output, keeping the decoder position.
    fn stop(&mut self);
    /// True while started and there is still audio left to play.
    fn is_playing(&self) -> bool;
}
