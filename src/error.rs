use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the logging, configuration and deployment layers.
///
/// A record skipped because of the deployment mode is never an error; only
/// genuine failures (I/O, malformed configuration, bad input) end up here.
#[derive(Debug, Error)]
pub enum LogError {
    /// Open, write, flush, rename or delete failed on `path`.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line of the environment file could not be parsed.
    #[error("Config parse error at line {line}: {reason}")]
    ConfigParse { line: usize, reason: String },

    #[error("Unknown deployment mode: {0}")]
    UnknownMode(String),

    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    /// A boolean setting held something other than 1/0/true/false/on/off/yes/no.
    #[error("Invalid flag value for {key}: {value}")]
    InvalidFlag { key: String, value: String },

    /// A value that cannot be stored on a single line of the environment file.
    #[error("Invalid value for {key}: line breaks are not allowed")]
    InvalidValue { key: String },

    /// `restore` was asked for but no backup copy exists.
    #[error("No backup to restore at {}", .0.display())]
    MissingBackup(PathBuf),

    /// A scoped path tried to leave its root directory.
    #[error("Path escapes scoped directory: {}", .0.display())]
    PathEscape(PathBuf),
}

impl LogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type LogResult<T> = std::result::Result<T, LogError>;
