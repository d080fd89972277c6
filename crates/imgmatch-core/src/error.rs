//! Failures that abort a match run before any output is produced.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    /// Source document is missing, unreadable, or not valid UTF-8.
    #[error("source document {} unavailable", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory to scan could not be opened or iterated.
    #[error("directory {} unavailable", path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MatchError {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MatchError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn directory_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MatchError::DirectoryUnavailable {
            path: path.into(),
            source,
        }
    }
}
