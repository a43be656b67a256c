//! Error types for level loading.

use std::io;

/// Errors produced while loading level definitions.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// The levels directory could not be read.
    #[error("levels directory error: {0}")]
    Io(#[from] io::Error),

    /// No level matched the requested id.
    #[error("no level with id '{id}'")]
    UnknownLevel {
        /// The requested level id.
        id: String,
    },
}
