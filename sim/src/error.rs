//! Error types.

use thiserror::Error;

/// Errors emitted while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Wrap IO errors when reading config files.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Values that parse but make no sense.
    #[error("invalid config: {0}")]
    Invalid(String),
}
