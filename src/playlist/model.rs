use std::path::{Path, PathBuf};

/// One line of the playlist file: a path exactly as written.
pub type PlaylistEntry = String;

/// An ordered, non-empty list of entries loaded from a playlist file.
#[derive(Debug, Clone)]
pub struct Playlist {
    entries: Vec<PlaylistEntry>,
    base_dir: Option<PathBuf>,
}

impl Playlist {
    /// Build a playlist from already-parsed entries.
    ///
    /// Returns `None` for an empty list; every other operation relies on
    /// there being at least one entry.
    pub fn new(entries: Vec<PlaylistEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            entries,
            base_dir: None,
        })
    }

    /// Resolve relative entries against `dir` from now on.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    /// The path to hand to the audio backend for `index`.
    pub fn resolve(&self, index: usize) -> Option<PathBuf> {
        let entry = Path::new(self.entries.get(index)?);
        match &self.base_dir {
            Some(dir) if entry.is_relative() => Some(dir.join(entry)),
            _ => Some(entry.to_path_buf()),
        }
    }
}
