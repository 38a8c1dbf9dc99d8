use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems found in a [`Config`](crate::Config) before `qtc` is ever run.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("either File or Dir must be specified")]
    MissingTarget,

    #[error("file {path} is not accessible: {reason}")]
    FileNotAccessible { path: String, reason: String },

    #[error("directory {path} is not accessible: {source}")]
    DirectoryNotAccessible {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not a directory")]
    NotADirectory { path: String },

    #[error("extension must start with a dot, got {ext:?}")]
    InvalidExtension { ext: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("qtc tool validation failed: {program} is unavailable: {reason}")]
    ToolUnavailable { program: String, reason: String },

    #[error("qtc compilation failed: {detail}")]
    CompilationFailed { detail: String },

    #[error("failed to walk directory {dir:?}")]
    Discovery {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// True when the input was rejected before any tool was run.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
