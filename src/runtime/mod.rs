use std::io::{self, IsTerminal};
use std::time::Duration;

use tracing::{info, warn};

use crate::audio::{AudioBackend, RodioBackend};
use crate::cli::Cli;
use crate::config::Settings;
use crate::error::{AppError, PlaybackError};
use crate::input::{KeySource, LineKeys, TerminalKeys};
use crate::logging;
use crate::playlist::load_playlist;
use crate::transport::Transport;

mod console;
mod event_loop;
mod settings;
mod startup;

pub use event_loop::Exit;


pub fn run(cli: Cli) -> Result<Exit, AppError> {
    let (mut settings, fallback) = settings::load_settings();
    startup::apply_cli(&mut settings, &cli);

    let _log_guard = logging::init(&settings.log, cli.verbose)?;
    if let Some(reason) = fallback {
        warn!("{reason}");
    }

    play_session(&cli, &settings, RodioBackend::open_default)
}

/// Load the playlist, then open the engine with `open_backend` and play
/// until the loop ends.
fn play_session<B, F>(cli: &Cli, settings: &Settings, open_backend: F) -> Result<Exit, AppError>
where
    B: AudioBackend,
    F: FnOnce() -> Result<B, PlaybackError>,
{
    // The playlist is read before the audio engine is touched, so a bad
    // playlist never opens the output device.
    let playlist = load_playlist(&cli.playlist, settings.playlist.relative_to_playlist)?;
    info!(
        path = %cli.playlist.display(),
        entries = playlist.len(),
        "playlist loaded"
    );

    let backend = open_backend()?;
    let mut transport = Transport::new(backend, playlist);
    let first = startup::apply_playback_defaults(&mut transport, settings);

    let mut keys: Box<dyn KeySource> = if settings.input.raw_mode && io::stdin().is_terminal() {
        Box::new(TerminalKeys::new()?)
    } else {
        Box::new(LineKeys::stdin())
    };

    let mut console = console::Console::new(io::stdout(), keys.raw());
    let total = transport.playlist().len();
    console.line(format_args!(
        "Playlist: {} ({} tracks)",
        cli.playlist.display(),
        total
    ))?;
    console.help()?;

    let started = match transport.play(first) {
        Ok(started) => started,
        Err(e) => {
            console.unplayable(&e, total)?;
            return Err(e.into());
        }
    };
    console.started(&started, total)?;

    let poll_interval = Duration::from_millis(settings.input.poll_interval_ms);
    let exit = event_loop::run(&mut transport, keys.as_mut(), &mut console, poll_interval)?;
    info!(?exit, "leaving");
    Ok(exit)
}
