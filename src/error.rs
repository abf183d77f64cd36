//! Custom error types and handling
//!
//! This module defines the error types raised while racing containers.
//! Only the binary boundary converts them into `anyhow` errors.

use std::io;
use std::path::PathBuf;

use crate::models::{ContainerKind, Operation};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum RaceError {
    // Source errors
    #[error("Error opening data file: {} ({source})", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading data file: {} ({source})", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Container errors
    #[error("{operation} on empty {container}")]
    EmptyContainer {
        container: ContainerKind,
        operation: Operation,
    },

    // Output errors
    #[error("Output error: {0}")]
    Output(#[from] io::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl RaceError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SourceUnavailable { .. } => "SOURCE_UNAVAILABLE",
            Self::Read { .. } => "READ_ERROR",
            Self::EmptyContainer { .. } => "EMPTY_CONTAINER",
            Self::Output(_) => "OUTPUT_ERROR",
            Self::Export(_) => "EXPORT_ERROR",
        }
    }
}

impl From<serde_json::Error> for RaceError {
    fn from(err: serde_json::Error) -> Self {
        RaceError::Export(err.to_string())
    }
}

/// Result type alias using RaceError
pub type RaceResult<T> = Result<T, RaceError>;
