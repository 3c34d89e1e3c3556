use crate::audio::AudioBackend;
use crate::cli::Cli;
use crate::config;
use crate::transport::Transport;

/// Layer command-line flags over loaded settings.
pub fn apply_cli(settings: &mut config::Settings, cli: &Cli) {
    if cli.shuffle {
        settings.playback.shuffle = true;
    }
    if let Some(mode) = cli.loop_mode {
        settings.playback.loop_mode = mode;
    }
    if cli.line_mode {
        settings.input.raw_mode = false;
    }
}

/// Apply playback defaults to a fresh transport and return the entry to
/// start with: the top of the shuffled order when shuffle starts on.
pub fn apply_playback_defaults<B: AudioBackend>(
    transport: &mut Transport<B>,
    settings: &config::Settings,
) -> usize {
    transport.set_loop_mode(settings.playback.loop_mode.into());
    if settings.playback.shuffle && !transport.order().is_shuffled() {
        transport.toggle_shuffle();
    }
    transport.order().first()
}
