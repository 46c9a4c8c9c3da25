//! Error types shared across Spanbench crates.
//!
//! The algorithms themselves never fail: they always return a result whose
//! validity flag carries the outcome. Errors come from the edges of the
//! system: building graphs from bad input, reading and parsing files,
//! persisting records, and invalid configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the Spanbench error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge violates the graph invariants.
    #[error("invalid edge ({u}, {v}): {reason}")]
    InvalidEdge {
        /// First endpoint as given.
        u: usize,
        /// Second endpoint as given.
        v: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A line of an input file could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// The file extension does not name a supported graph format.
    #[error("unsupported graph format: {}", path.display())]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },

    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl Error {
    /// Creates an [`Error::InvalidEdge`].
    pub fn invalid_edge(u: usize, v: usize, reason: impl Into<String>) -> Self {
        Error::InvalidEdge {
            u,
            v,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Parse`].
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}
