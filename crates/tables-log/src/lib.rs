// ABOUTME: Shared logging setup for tables binaries
// ABOUTME: Stderr logging with a chosen default level, or append-only file logging

use std::path::Path;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Filter with `default` as the baseline level. RUST_LOG directives win.
pub fn filter(default: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy()
}

/// Logging to stderr at `level` unless RUST_LOG says otherwise.
/// Used by the CLI for its verbosity flags.
pub fn init_with_level(level: Level) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .init();
}

/// Map a `-v` count to a level: 0 is WARN, 1 INFO, 2 DEBUG, more TRACE.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Append logs to `path` at `level`, without ANSI colors.
/// If the file cannot be opened, prints a warning to stderr and falls
/// back to stderr logging.
pub fn init_file(path: &Path, level: Level) {
    match open_log(path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_env_filter(filter(level))
                .with_ansi(false)
                .init();
        }
        Err(e) => {
            eprintln!("Warning: failed to open log file {}: {e}", path.display());
            init_with_level(level);
        }
    }
}

fn open_log(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::OpenOptions::new().create(true).append(true).open(path)
}
