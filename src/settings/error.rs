//! Settings error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`SettingsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Parse,
    Write,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be opened or read.
    #[error("Settings file not found or unreadable: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file is not a well-formed JSON object.
    #[error("Invalid settings JSON in {}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The defaults file could not be written.
    #[error("Failed writing default settings to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SettingsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SettingsError::NotFound { .. } => ErrorKind::NotFound,
            SettingsError::Parse { .. } => ErrorKind::Parse,
            SettingsError::Write { .. } => ErrorKind::Write,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            SettingsError::NotFound { path, .. }
            | SettingsError::Parse { path, .. }
            | SettingsError::Write { path, .. } => path,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        SettingsError::Parse { path: path.into(), reason: reason.into(), source: None }
    }
}
