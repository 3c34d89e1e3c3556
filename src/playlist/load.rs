use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;

use super::model::{Playlist, PlaylistEntry};

const BOM: char = '\u{feff}';

/// Keep the lines of a playlist that name a track.
///
/// Only the line ending is removed, so paths keep any leading or trailing
/// spaces. Blank lines and lines starting with `#` are dropped.
pub fn parse_playlist(text: &str) -> Vec<PlaylistEntry> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<PlaylistEntry> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.starts_with('#') {
        None
    } else {
        Some(line.to_string())
    }
}

/// Read `path` into a `Playlist`.
///
/// When `relative_to_playlist` is set, relative entries later resolve
/// against the directory containing the playlist file.
pub fn load_playlist(path: &Path, relative_to_playlist: bool) -> Result<Playlist, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut text = String::new();
    BufReader::new(file)
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let entries = parse_playlist(&text);
    debug!(path = %path.display(), entries = entries.len(), "playlist read");

    let playlist = Playlist::new(entries).ok_or_else(|| LoadError::Empty {
        path: path.to_path_buf(),
    })?;

    if !relative_to_playlist {
        return Ok(playlist);
    }
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => Ok(playlist.with_base_dir(dir)),
        None => Ok(playlist),
    }
}
