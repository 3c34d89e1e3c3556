use std::io::Write;
use std::time::Duration;

use tracing::debug;

use crate::audio::AudioBackend;
use crate::error::AppError;
use crate::input::{Command, KeySource};
use crate::playlist::TrackInfo;
use crate::transport::{Advance, PauseToggle, Transport};

use super::console::Console;

/// Why the loop ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Exit {
    Quit,
    EndOfPlaylist,
}

/// Main polling loop: notice finished tracks, wait up to `poll_interval`
/// for a key, dispatch it. Returns once the user quits or a `no-loop`
/// playlist runs out.
pub fn run<B: AudioBackend, W: Write>(
    transport: &mut Transport<B>,
    keys: &mut dyn KeySource,
    console: &mut Console<W>,
    poll_interval: Duration,
) -> Result<Exit, AppError> {
    let total = transport.playlist().len();
    loop {
        match step(transport, keys, console, poll_interval) {
            Ok(Some(exit)) => return Ok(exit),
            Ok(None) => {}
            Err(AppError::Playback(e)) => {
                console.unplayable(&e, total)?;
                return Err(e.into());
            }
            Err(e) => return Err(e),
        }
    }
}

/// One pass of the loop. `Some` means the loop is over.
fn step<B: AudioBackend, W: Write>(
    transport: &mut Transport<B>,
    keys: &mut dyn KeySource,
    console: &mut Console<W>,
    poll_interval: Duration,
) -> Result<Option<Exit>, AppError> {
    let total = transport.playlist().len();

    if transport.poll_finished() {
        match transport.advance_after_finish()? {
            Advance::Started(started) => console.started(&started, total)?,
            Advance::EndOfPlaylist { skipped } => {
                console.skipped(&skipped, total)?;
                console.line("Playlist complete")?;
                return Ok(Some(Exit::EndOfPlaylist));
            }
        }
        return Ok(None);
    }

    let Some(key) = keys.read_key(poll_interval)? else {
        return Ok(None);
    };

    match Command::try_from(key) {
        Ok(Command::Quit) => {
            transport.stop_all();
            return Ok(Some(Exit::Quit));
        }
        Ok(cmd) => handle_command(cmd, transport, console)?,
        Err(e) => {
            debug!(error = %e, "ignored key");
            console.help()?;
        }
    }
    Ok(None)
}

fn handle_command<B: AudioBackend, W: Write>(
    cmd: Command,
    transport: &mut Transport<B>,
    console: &mut Console<W>,
) -> Result<(), AppError> {
    let total = transport.playlist().len();
    match cmd {
        Command::Next => {
            let started = transport.next()?;
            console.started(&started, total)?;
        }
        Command::Prev => {
            let started = transport.prev()?;
            console.started(&started, total)?;
        }
        Command::TogglePause => match transport.toggle_pause()? {
            PauseToggle::Paused => console.line("Paused")?,
            PauseToggle::Resumed => console.line("Resumed")?,
            PauseToggle::Started(started) => console.started(&started, total)?,
        },
        Command::ToggleShuffle => {
            let on = transport.toggle_shuffle();
            console.line(format_args!("Shuffle {}", if on { "ON" } else { "OFF" }))?;
        }
        Command::CycleLoopMode => {
            let mode = transport.cycle_loop_mode();
            console.line(format_args!("Loop mode: {mode}"))?;
        }
        Command::NowPlaying => {
            let index = transport.current();
            let title = transport
                .playlist()
                .resolve(index)
                .map(|path| TrackInfo::read(&path).display(&path))
                .unwrap_or_default();
            console.line(format_args!(
                "[{}/{}] {} ({:?}, {}, shuffle {})",
                index + 1,
                total,
                title,
                transport.state(),
                transport.loop_mode(),
                if transport.order().is_shuffled() { "on" } else { "off" },
            ))?;
        }
        Command::Help => console.help()?,
        Command::Quit => {}
    }
    Ok(())
}
