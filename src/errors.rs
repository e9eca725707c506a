//! Custom error types for archiving

use std::fmt;
use std::io;

/// Archive-specific error types
#[derive(Debug)]
pub enum ArchiveError {
    /// I/O error
    IoError(io::Error),
    /// A required argument was missing or empty
    InvalidArgument(String),
    /// No compression strategy is registered under this name
    UnknownCompression(String),
    /// Malformed configuration or method table
    ConfigError(String),
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::IoError(e) => write!(f, "I/O error: {}", e),
            ArchiveError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ArchiveError::UnknownCompression(name) => write!(f, "Unknown compression method: {}", name),
            ArchiveError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ArchiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArchiveError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ArchiveError {
    fn from(error: io::Error) -> Self {
        ArchiveError::IoError(error)
    }
}

impl From<toml::de::Error> for ArchiveError {
    fn from(error: toml::de::Error) -> Self {
        ArchiveError::ConfigError(error.to_string())
    }
}

/// Result type for archive operations
pub type ArchiveResult<T> = Result<T, ArchiveError>;
