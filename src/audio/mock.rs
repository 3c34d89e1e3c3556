//! In-memory backend for exercising the transport and the loop without a
//! sound device.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::PlaybackError;

use super::backend::{AudioBackend, Sound};

#[derive(Debug, Default)]
pub struct MockState {
    /// Sounds currently alive (opened, not yet dropped).
    pub live: usize,
    /// Highest value `live` ever reached.
    pub max_live: usize,
    /// Every path passed to `open`, including failed ones.
    pub opened: Vec<PathBuf>,
    /// Paths that fail to open.
    pub failing: HashSet<PathBuf>,
    /// Simulates the live sound reaching its end.
    pub finished: bool,
    /// Start/stop calls in order, as `"start"` / `"stop"`.
    pub calls: Vec<&'static str>,
}

#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    pub state: Rc<RefCell<MockState>>,
}

impl MockBackend {
    pub fn failing(paths: &[&str]) -> Self {
        let backend = Self::default();
        backend
            .state
            .borrow_mut()
            .failing
            .extend(paths.iter().map(PathBuf::from));
        backend
    }

    /// Make the live sound report that it ran out of audio.
    pub fn finish_current(&self) {
        self.state.borrow_mut().finished = true;
    }

    pub fn live(&self) -> usize {
        self.state.borrow().live
    }

    pub fn opened(&self) -> Vec<String> {
        self.state
            .borrow()
            .opened
            .iter()
            .map(|p| p.display().to_string())
            .collect()
    }
}

impl AudioBackend for MockBackend {
    type Sound = MockSound;

    fn open(&mut self, path: &Path) -> Result<MockSound, PlaybackError> {
        let mut state = self.state.borrow_mut();
        state.opened.push(path.to_path_buf());
        if state.failing.contains(path) {
            return Err(PlaybackError::Decode {
                path: path.to_path_buf(),
                reason: "mock failure".to_string(),
            });
        }
        state.live += 1;
        state.max_live = state.max_live.max(state.live);
        state.finished = false;
        Ok(MockSound {
            state: Rc::clone(&self.state),
            started: false,
        })
    }
}

#[derive(Debug)]
pub struct MockSound {
    state: Rc<RefCell<MockState>>,
    started: bool,
}

impl Sound for MockSound {
    fn start(&mut self) {
        self.started = true;
        self.state.borrow_mut().calls.push("start");
    }

    fn stop(&mut self) {
        self.started = false;
        self.state.borrow_mut().calls.push("stop");
    }

    fn is_playing(&self) -> bool {
        self.started && !self.state.borrow().finished
    }
}

impl Drop for MockSound {
    fn drop(&mut self) {
        self.state.borrow_mut().live -= 1;
    }
}
