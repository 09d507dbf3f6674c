use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use bikeshare_core::datasets::DataConfig;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure `~/.bikeshare/` exists so last-used parameters can be saved.
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(home.join(".bikeshare"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a CLI log level (`DEBUG`, `INFO`, `WARNING`, `ERROR`, `CRITICAL`) to a
/// `tracing` filter directive.
///
/// Unknown strings are passed through so `RUST_LOG`-style directives such as
/// `bikeshare_data=debug` also work.
pub fn normalise_level(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_string(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Events go to stderr, or are appended to `log_file` (without ANSI colours)
/// when one is given. Report text never goes through the logger.
pub fn setup_logging(log_level: &str, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(normalise_level(log_level)).unwrap_or_else(|_| EnvFilter::new("warn"));

    let (writer, ansi) = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_ansi(ansi)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("logging already initialised")?;

    Ok(())
}

// ── Data-dir discovery ─────────────────────────────────────────────────────────

/// Choose the directory holding the city exports.
///
/// An explicit (or last-used) directory always wins. Otherwise the first of
/// `./`, `./data/` and `~/.bikeshare/data/` that contains `chicago.csv` is
/// used, falling back to `./`.
pub fn discover_data_dir(explicit: Option<&Path>) -> PathBuf {
    discover_data_dir_in(explicit, Path::new("."), dirs::home_dir().as_deref())
}

/// [`discover_data_dir`] with the working and home directories supplied.
pub fn discover_data_dir_in(explicit: Option<&Path>, cwd: &Path, home: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    let mut candidates = vec![cwd.to_path_buf(), cwd.join("data")];
    if let Some(home) = home {
        candidates.push(home.join(".bikeshare").join("data"));
    }

    match candidates
        .into_iter()
        .find(|dir| DataConfig::looks_like_data_dir(dir))
    {
        Some(dir) => dir,
        None => {
            tracing::warn!("no directory with chicago.csv found; using {}", cwd.display());
            cwd.to_path_buf()
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
