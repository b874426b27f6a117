//! Error types for the web UI build
//!
//! This module defines the failure taxonomy of a build: a missing main
//! document aborts the build, a missing stylesheet or script only produces a
//! warning, and any read or write failure on an existing path is fatal.

use std::path::PathBuf;
use thiserror::Error;

use crate::pipeline::Dialect;

/// Result type alias for build operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Error types for build operations
#[derive(Debug, Error)]
pub enum BuildError {
    /// The primary markup document does not exist
    #[error("Main document not found: {}", path.display())]
    MissingMainInput { path: PathBuf },

    /// A referenced stylesheet or script does not exist (recoverable)
    #[error("{dialect} resource not found: {}", path.display())]
    MissingSubResource { dialect: Dialect, path: PathBuf },

    /// Read or write failure on an existing path
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rejected by the config builder
    #[error("Invalid build configuration: {0}")]
    InvalidConfig(String),
}

impl BuildError {
    /// Wrap an IO error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if the build must stop on this error
    ///
    /// Only `MissingSubResource` is recoverable: the reference stays in the
    /// document and the build carries on.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, BuildError::MissingSubResource { .. })
    }
}
