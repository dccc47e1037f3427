//! Error types for startup and configuration
//!
//! Nothing inside the frame loop is fallible; these cover the edges where
//! the game talks to files and the host engine.

use thiserror::Error;

/// Asset loading errors. Any of these aborts launch.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {path}")]
    NotFound { path: String },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}
