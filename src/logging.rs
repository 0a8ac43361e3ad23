use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::types::BotError;

const DEFAULT_FILTER: &str = "debug";

/// Install the global subscriber writing to an append-only log file.
/// `RUST_LOG` overrides the default `debug` filter.
pub fn init(path: &Path) -> Result<(), BotError> {
    let file = open_log_file(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if tracing::subscriber::set_global_default(file_subscriber(file, filter)).is_err() {
        eprintln!("tracing subscriber already installed, keeping the existing one");
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, BotError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

// Each line: timestamp, level, target (logger name), message and fields.
fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .finish()
}
