use std::path::PathBuf;

use clap::Parser;

use crate::config::LoopModeSetting;

/// Play a text playlist from the terminal.
///
/// The playlist has one audio file path per line; blank lines and lines
/// starting with `#` are ignored.
#[derive(Debug, Parser)]
#[command(name = "tapedeck", version, about)]
pub struct Cli {
    /// Playlist file to play.
    pub playlist: PathBuf,

    /// Start with shuffle enabled.
    #[arg(short, long)]
    pub shuffle: bool,

    /// What to do when a track ends on its own.
    #[arg(short = 'l', long = "loop", value_enum)]
    pub loop_mode: Option<LoopModeSetting>,

    /// Read commands line by line (press Enter after each key).
    #[arg(long)]
    pub line_mode: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_playlist_and_flags() {
        let cli = Cli::try_parse_from(["tapedeck", "-s", "--loop", "no-loop", "list.txt"]).unwrap();
        assert_eq!(cli.playlist, PathBuf::from("list.txt"));
        assert!(cli.shuffle);
        assert_eq!(cli.loop_mode, Some(LoopModeSetting::NoLoop));
        assert!(!cli.line_mode);
        assert!(!cli.verbose);
    }

    #[test]
    fn long_shuffle_and_line_mode() {
        let cli = Cli::try_parse_from(["tapedeck", "--shuffle", "--line-mode", "-v", "p.m3u"]).unwrap();
        assert!(cli.shuffle && cli.line_mode && cli.verbose);
        assert_eq!(cli.loop_mode, None);
    }

    #[test]
    fn playlist_argument_is_required() {
        assert!(Cli::try_parse_from(["tapedeck"]).is_err());
        assert!(Cli::try_parse_from(["tapedeck", "--loop", "sideways", "x"]).is_err());
    }
}
