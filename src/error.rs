//! Top-level error types for the archiver binary.
//!
//! Errors from the archive stage pass through unchanged so the CLI prints
//! their full message chain.

use thiserror::Error;

/// Result type alias for archiver operations
pub type Result<T> = std::result::Result<T, ArchiverError>;

/// Main error type for all archiver operations
#[derive(Error, Debug)]
pub enum ArchiverError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Archive stage errors
    #[error(transparent)]
    Archive(#[from] crate::archive::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}
