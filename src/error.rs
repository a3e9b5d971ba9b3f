//! Domain-specific error types for stringref using thiserror
//!
//! File-level failures during a pass are recorded and skipped rather than
//! aborting the traversal; only configuration problems and an unreadable
//! registry file are hard errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stringref operations
#[derive(Error, Debug)]
pub enum StringrefError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to replace {path:?} atomically")]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("registry file {path:?} is unreadable")]
    Registry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

/// Result type alias for stringref operations
pub type StringrefResult<T> = Result<T, StringrefError>;
