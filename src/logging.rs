//! `tracing` subscriber setup.
//!
//! Logs go to stderr by default, or to `log.file` when configured. The
//! terminal may be in raw mode while we run, where a bare `\n` does not
//! return the cursor, so stderr output is written with `\r\n`.

use std::fs;
use std::io::{self, Write};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;
use crate::error::AppError;

/// Keeps the file writer flushing until dropped.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `settings.level`; `verbose` wins over both.
pub fn init(settings: &LogSettings, verbose: bool) -> Result<LogGuard, AppError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(f) => f,
            Err(_) => EnvFilter::try_new(&settings.level)
                .map_err(|e| AppError::Logging(format!("bad log level {:?}: {e}", settings.level)))?,
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let guard = match &settings.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|d| !d.as_os_str().is_empty())
                .unwrap_or(std::path::Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| AppError::Logging(format!("{} is not a file", path.display())))?;
            fs::create_dir_all(dir).map_err(|e| AppError::Logging(e.to_string()))?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|e| AppError::Logging(e.to_string()))?;
            Some(guard)
        }
        None => {
            builder
                .with_writer(|| CrlfWriter(io::stderr()))
                .try_init()
                .map_err(|e| AppError::Logging(e.to_string()))?;
            None
        }
    };

    Ok(LogGuard { _file: guard })
}

/// Rewrites `\n` as `\r\n`.
pub struct CrlfWriter<W: Write>(pub W);

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for chunk in buf.split_inclusive(|&b| b == b'\n') {
            match chunk.strip_suffix(b"\n") {
                Some(body) => {
                    self.0.write_all(body)?;
                    self.0.write_all(b"\r\n")?;
                }
                None => self.0.write_all(chunk)?,
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
