use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV document could not be parsed or is missing a required column.
    #[error("Failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A `Start Time` value did not match any recognised format.
    #[error("Invalid timestamp {value:?} in {path} at row {row}")]
    TimestampParse {
        path: PathBuf,
        row: usize,
        value: String,
    },

    /// A city name string is not one of the three supported cities.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// The console input stream ended or became unreadable mid-prompt.
    #[error("Input stream closed while waiting for an answer")]
    InputClosed,

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;
