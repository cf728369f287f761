use std::num::ParseIntError;

use thiserror::Error;

/// Failures that can stop the service from starting. Request handling never produces one.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid SERVE_MODE `{0}`, expected LAMBDA or LOCAL")]
    InvalidServeMode(String),
    #[error("invalid PORT `{value}`: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
    #[error("invalid LOG_LEVEL `{0}`")]
    InvalidLogLevel(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
