use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or validating a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cell size must be positive, got {0}")]
    NonPositiveCellSize(i32),

    #[error("surface {width}x{height} must be positive and divisible by cell size {cell_size}")]
    MisalignedSurface {
        width: i32,
        height: i32,
        cell_size: i32,
    },

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,

    #[error("{name} ({x}, {y}) must be a grid-aligned cell inside the surface")]
    InvalidCell { name: &'static str, x: i32, y: i32 },
}

/// Top-level failures of the terminal application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
