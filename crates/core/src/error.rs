use std::io;
use std::time::Duration;

/// Errors that can occur during polyrun operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to start '{program}': {source}")]
    SpawnError {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' timed out after {}s and was killed", .limit.as_secs_f64())]
    Timeout { program: String, limit: Duration },

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Console input error: {0}")]
    ConsoleError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for polyrun operations
pub type Result<T> = std::result::Result<T, Error>;
