use std::fmt::Display;
use std::io::{self, Write};

use crate::error::PlaybackError;
use crate::input::HELP;
use crate::playlist::TrackInfo;
use crate::transport::{Skipped, Started};

/// User-facing status output.
///
/// In raw mode the terminal does not translate `\n`, so every line ends
/// with `\r\n` there.
pub struct Console<W: Write> {
    out: W,
    raw: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, raw: bool) -> Self {
        Self { out, raw }
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        let eol = if self.raw { "\r\n" } else { "\n" };
        write!(self.out, "{text}{eol}")?;
        self.out.flush()
    }

    pub fn help(&mut self) -> io::Result<()> {
        self.line("Controls:")?;
        for (keys, what) in HELP {
            self.line(format_args!("  {keys:<8} {what}"))?;
        }
        Ok(())
    }

    pub fn skipped(&mut self, skipped: &[Skipped], total: usize) -> io::Result<()> {
        for entry in skipped {
            self.line(format_args!(
                "Skip [{}/{}]: {}",
                entry.index + 1,
                total,
                entry.error
            ))?;
        }
        Ok(())
    }

    /// Report skipped entries and the track that is now playing.
    pub fn started(&mut self, started: &Started, total: usize) -> io::Result<()> {
        self.skipped(&started.skipped, total)?;
        let title = TrackInfo::read(&started.path).display(&started.path);
        self.now_playing(started.index, total, &title)
    }

    pub fn now_playing(&mut self, index: usize, total: usize, title: &str) -> io::Result<()> {
        self.line(format_args!("Playing [{}/{}] {}", index + 1, total, title))
    }

    /// List the entries behind a `NothingPlayable` failure.
    pub fn unplayable(&mut self, error: &PlaybackError, total: usize) -> io::Result<()> {
        match error {
            PlaybackError::NothingPlayable { skipped } => self.skipped(skipped, total),
            _ => Ok(()),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}
