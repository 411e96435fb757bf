//! Release archive assembly library.
//!
//! This library packages per-target build artifacts into distributable files:
//! - tar.gz archives
//! - zip archives
//! - renamed pass-through binaries
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod archive;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{ArchiverError, CliError, Result};
