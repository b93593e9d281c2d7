use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read the passage source at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read passage {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseError {
    /// The exercise is complete; the host must stop dispatching keystrokes.
    #[error("the exercise is already complete")]
    EndOfExercise,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("row width must be a positive integer, got {0}")]
    InvalidRowWidth(i64),
    #[error("wpm ceiling must be greater than zero")]
    InvalidWpmCeiling,
    #[error("unknown keyboard layout {0:?}")]
    UnknownLayout(String),
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
