use std::path::Path;
use std::time::Duration;

use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};

/// Tag details shown when a track starts. Everything is optional; files
/// without readable tags fall back to their file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration: Option<Duration>,
}

impl TrackInfo {
    /// Read tags from `path`, ignoring any failure.
    pub fn read(path: &Path) -> Self {
        let Ok(tagged) = lofty::read_from_path(path) else {
            return Self::default();
        };

        let mut info = Self {
            duration: Some(tagged.properties().duration()).filter(|d| !d.is_zero()),
            ..Self::default()
        };

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            info.title = non_blank(tag.title().as_deref());
            info.artist = non_blank(tag.artist().as_deref());
        }
        info
    }

    /// `Artist - Title`, just the title, or the file stem of `path`.
    pub fn display(&self, path: &Path) -> String {
        let fallback = || {
            path.file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
                .unwrap_or_else(|| path.display().to_string())
        };
        let title = self.title.clone().unwrap_or_else(fallback);
        let text = match &self.artist {
            Some(artist) => format!("{artist} - {title}"),
            None => title,
        };
        match self.duration {
            Some(d) => format!("{text} ({})", format_mmss(d)),
            None => text,
        }
    }
}

fn non_blank(v: Option<&str>) -> Option<String> {
    v.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Format a `Duration` as `MM:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
