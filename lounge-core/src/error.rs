//! Structured error types for lounge-core.
//!
//! Uses `thiserror` for better API surface and error composition.
//! The binary crate (lounge-tui) can still use `anyhow` for convenience,
//! but library consumers get structured, composable errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lounge-core operations
#[derive(Error, Debug)]
pub enum LoungeError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// File or directory not found
    #[error("Path not found: {path:?}")]
    PathNotFound { path: PathBuf },

    /// TOML parsing failed
    #[error("Invalid TOML in {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for lounge-core operations
pub type Result<T> = std::result::Result<T, LoungeError>;

impl LoungeError {
    /// Create a path not found error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a TOML parse error with the offending path
    pub fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
