use std::process::ExitCode;

use clap::Parser;

mod audio;
mod cli;
mod config;
mod error;
mod input;
mod logging;
mod playlist;
mod runtime;
mod transport;

fn main() -> ExitCode {
    // Usage errors exit here with clap's own status code.
    let cli = cli::Cli::parse();

    match runtime::run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tapedeck: {e}");
            ExitCode::FAILURE
        }
    }
}
