use std::env;

use tracing::Level;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeMode {
    Lambda,
    Local,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub serve_mode: ServeMode,
    pub host: String,
    pub port: u16,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any variable source. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let serve_mode = match lookup("SERVE_MODE") {
            Some(mode) => match mode.to_ascii_uppercase().as_str() {
                "LAMBDA" => ServeMode::Lambda,
                "LOCAL" => ServeMode::Local,
                _ => return Err(AppError::InvalidServeMode(mode)),
            },
            // Set by the Lambda execution environment
            None if lookup("AWS_LAMBDA_RUNTIME_API").is_some() => ServeMode::Lambda,
            None => ServeMode::Local,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| AppError::InvalidPort { value, source })?,
            None => 3000,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .parse()
                .map_err(|_| AppError::InvalidLogLevel(value))?,
            None => Level::INFO,
        };

        Ok(Config {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            serve_mode,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            log_level,
        })
    }
}
