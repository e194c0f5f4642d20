//! Error types for loading, rendering, and writing parameter documents.

use std::path::PathBuf;

/// Result alias for library operations.
pub type DocgenResult<T> = Result<T, DocgenError>;

#[derive(Debug, thiserror::Error)]
pub enum DocgenError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse '{origin}': {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },

    #[error("table '{table}', parameter #{index}: missing required field '{field}'")]
    MissingField {
        table: String,
        index: usize,
        field: &'static str,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

/// Coarse failure category, independent of the underlying cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input missing, unreadable, or not a valid tables document.
    Parse,
    /// A parameter record lacks `name` or `type`.
    MissingField,
    /// Output could not be produced or written.
    Write,
}

impl DocgenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } | Self::Parse { .. } => ErrorKind::Parse,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::Write { .. } | Self::Render(_) => ErrorKind::Write,
        }
    }
}
