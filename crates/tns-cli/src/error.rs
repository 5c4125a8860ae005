//! Error types for tns-cli.
//!
//! Each variant maps to a distinct process exit code so scripts can
//! tell a missing file from a malformed one.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Malformed tensor data
    #[error("Invalid tensor format: {0}")]
    InvalidFormat(String),

    /// Density is undefined for the given input
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Get exit code for this error
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound(_) | Self::NotAFile(_) => ExitCode::from(3),
            Self::InvalidFormat(_) => ExitCode::from(4),
            Self::DegenerateInput(_) => ExitCode::from(5),
            Self::Io(_) => ExitCode::from(7),
        }
    }
}

impl From<frostt::FrosttError> for CliError {
    fn from(e: frostt::FrosttError) -> Self {
        match e {
            frostt::FrosttError::Io(io) => Self::Io(io),
            frostt::FrosttError::DegenerateInput => Self::DegenerateInput(e.to_string()),
            frostt::FrosttError::InvalidIndex { .. } | frostt::FrosttError::OrderMismatch { .. } => {
                Self::InvalidFormat(e.to_string())
            }
        }
    }
}
