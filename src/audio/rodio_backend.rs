//! `rodio` implementation of the audio backend.
//!
//! The output stream is opened once and kept for the lifetime of the
//! backend. Each track gets its own paused `Sink` fed by a `Decoder`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, trace};

use crate::error::PlaybackError;

use super::backend::{AudioBackend, Sound};

pub struct RodioBackend {
    stream: OutputStream,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open_default() -> Result<Self, PlaybackError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError::Engine(e.to_string()))?;
        // rodio prints to stderr when the stream is dropped, which garbles a
        // raw-mode terminal on quit.
        stream.log_on_drop(false);
        debug!("audio output opened");
        Ok(Self { stream })
    }
}

impl AudioBackend for RodioBackend {
    type Sound = RodioSound;

    fn open(&mut self, path: &Path) -> Result<RodioSound, PlaybackError> {
        let file = File::open(path).map_err(|source| PlaybackError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let source = Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();
        trace!(path = %path.display(), "sink created");
        Ok(RodioSound { sink })
    }
}

pub struct RodioSound {
    sink: Sink,
}

impl Sound for RodioSound {
    fn start(&mut self) {
        self.sink.play();
    }

    fn stop(&mut self) {
        self.sink.pause();
    }

    fn is_playing(&self) -> bool {
        !self.sink.is_paused() && !self.sink.empty()
    }
}

impl Drop for RodioSound {
    fn drop(&mut self) {
        self.sink.stop();
        trace!("sink released");
    }
}
