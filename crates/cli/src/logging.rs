//! Logging initialization for the CLI.
//!
//! `render` logs to stderr. The interactive host owns the terminal, so it
//! only logs when `--log-file` names a file to write to.

use std::path::Path;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `--debug` is given.
const DEFAULT_LEVEL: &str = "info";

/// Where log output goes.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Disabled,
}

/// Keeps buffered file output alive until the program exits.
pub struct LoggingHandle {
    pub _guard: Option<WorkerGuard>,
}

/// Builds the filter: `RUST_LOG` wins, then `--debug`, then the default.
fn filter(debug: bool) -> EnvFilter {
    let level = if debug { "debug" } else { DEFAULT_LEVEL };
    EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()))
}

/// Install the global subscriber for `target`.
pub fn init_logging(target: LogTarget<'_>, debug: bool) -> Result<LoggingHandle> {
    match target {
        LogTarget::Disabled => Ok(LoggingHandle { _guard: None }),
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter(debug))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
            Ok(LoggingHandle { _guard: None })
        }
        LogTarget::File(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| eyre!("log file path has no file name: {}", path.display()))?;
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(dir)?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter(debug))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .try_init()?;
            Ok(LoggingHandle {
                _guard: Some(guard),
            })
        }
    }
}
