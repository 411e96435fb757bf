//! Error types for archive assembly.
//!
//! Every error is terminal for the target it occurs on. The [`Context`] and
//! [`ErrorExt`] traits attach outer context the way the stage reports it to
//! users, e.g. `failed to find files to archive: globbing failed for pattern ...`.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while assembling release archives.
#[derive(Debug, Error)]
pub enum Error {
    /// A file pattern was invalid or matched nothing.
    #[error("globbing failed for pattern {pattern}: {reason}")]
    Glob {
        /// Pattern as written in the configuration.
        pattern: String,
        /// Parser message, or `file does not exist` for zero matches.
        reason: String,
    },

    /// A name template referenced an undefined variable or failed to parse.
    #[error("failed to render name template `{template}`: {reason}")]
    Template {
        /// Template source.
        template: String,
        /// Renderer message.
        reason: String,
    },

    /// The resolved package format has no writer.
    #[error("unsupported archive format: {0}")]
    UnsupportedFormat(String),

    /// The destination file or its parent directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Destination that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing an archive stream failed part way through.
    #[error("failed to write archive {}: {reason}", path.display())]
    ArchiveWrite {
        /// Archive being written.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// A filesystem operation on a known path failed.
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// Operation being performed.
        context: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Plain I/O error.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// An error wrapped with an outer message.
    #[error("{context}: {source}")]
    Context {
        /// Outer message.
        context: String,
        /// Originating error.
        #[source]
        source: Box<Error>,
    },

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

/// Attaches an outer message to a failure.
pub trait Context<T> {
    /// Wraps the error (or `None`) with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Like [`Context::context`] but builds the message lazily.
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context {
            context: context.to_string(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context {
            context: f().to_string(),
            source: Box::new(e.into()),
        })
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Attaches path information to raw I/O failures.
pub trait ErrorExt<T> {
    /// Converts an [`io::Error`] into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Returns early with [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::archive::Error::GenericError(format!($($arg)*)))
    };
}
