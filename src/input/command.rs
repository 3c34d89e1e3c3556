use crate::error::InputError;

/// A keypress, independent of where it came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Left,
    Right,
    /// Ctrl-C while the terminal is in raw mode.
    Interrupt,
    /// Input stream closed.
    Eof,
}

/// What the user asked the player to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    TogglePause,
    ToggleShuffle,
    CycleLoopMode,
    NowPlaying,
    Help,
    Quit,
}

impl TryFrom<Key> for Command {
    type Error = InputError;

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        let cmd = match key {
            Key::Right => Command::Next,
            Key::Left => Command::Prev,
            Key::Esc | Key::Interrupt | Key::Eof => Command::Quit,
            Key::Char(c) => match c.to_ascii_lowercase() {
                'n' => Command::Next,
                'p' => Command::Prev,
                ' ' => Command::TogglePause,
                's' => Command::ToggleShuffle,
                'r' => Command::CycleLoopMode,
                'i' => Command::NowPlaying,
                'h' | '?' => Command::Help,
                'q' => Command::Quit,
                _ => return Err(InputError::UnknownKey(key)),
            },
            Key::Enter => return Err(InputError::UnknownKey(key)),
        };
        Ok(cmd)
    }
}

/// Help text listing every binding, one per line.
pub const HELP: &[(&str, &str)] = &[
    ("n / →", "next track"),
    ("p / ←", "previous track"),
    ("space", "pause / resume"),
    ("s", "toggle shuffle"),
    ("r", "cycle loop mode"),
    ("i", "show current track"),
    ("h / ?", "this help"),
    ("q / esc", "quit"),
];
