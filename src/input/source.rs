//! Where keypresses come from.
//!
//! `TerminalKeys` reads single keys in raw mode through crossterm.
//! `LineKeys` reads whole lines from stdin, for pipes and dumb terminals.

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::{debug, warn};

use super::command::Key;

/// A non-blocking keyboard.
pub trait KeySource {
    /// Wait at most `timeout` for the next key. `Ok(None)` means nothing
    /// arrived in time.
    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<Key>>;

    /// Whether output must use `\r\n` line endings while this source is
    /// active.
    fn raw(&self) -> bool {
        false
    }
}

/// Raw-mode terminal input. Raw mode is enabled on construction and
/// restored on drop.
pub struct TerminalKeys {
    _private: (),
}

impl TerminalKeys {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        debug!("terminal raw mode on");
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalKeys {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to restore terminal mode");
        }
    }
}

impl KeySource for TerminalKeys {
    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }

    fn raw(&self) -> bool {
        true
    }
}

pub(super) fn map_key_event(key: KeyEvent) -> Option<Key> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Key::Interrupt)
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Eof),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

/// Line-buffered stdin. A helper thread blocks on stdin and forwards each
/// line; the first character of a line is the key.
pub struct LineKeys {
    rx: Receiver<String>,
}

impl LineKeys {
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::channel::<String>();
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
            // Dropping `tx` tells the reader that stdin is closed.
        });
        Self { rx }
    }

    #[cfg(test)]
    pub(super) fn from_receiver(rx: Receiver<String>) -> Self {
        Self { rx }
    }
}

impl KeySource for LineKeys {
    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        match self.rx.recv_timeout(timeout) {
            Ok(line) => Ok(Some(line_to_key(&line))),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Ok(Some(Key::Eof)),
        }
    }
}

pub(super) fn line_to_key(line: &str) -> Key {
    // A lone space is meaningful (pause), so only strip line endings.
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Key::Enter;
    }
    line.trim().chars().next().map_or(Key::Char(' '), Key::Char)
}

/// Replays a fixed list of keys; `None` entries simulate an idle poll.
/// Once exhausted it reports end of input.
#[cfg(test)]
pub struct ScriptedKeys {
    keys: std::collections::VecDeque<Option<Key>>,
}

#[cfg(test)]
impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl KeySource for ScriptedKeys {
    fn read_key(&mut self, _timeout: Duration) -> io::Result<Option<Key>> {
        Ok(self.keys.pop_front().unwrap_or(Some(Key::Eof)))
    }
}
