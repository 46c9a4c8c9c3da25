//! Supported input dialects.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spanbench_common::utils::error::{Error, Result};

/// Textual graph format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphFormat {
    /// `.edges`: one `u v [w]` edge per line.
    EdgeList,
    /// `.mtx`: a size header line, then 1-indexed `u v [w]` lines.
    MatrixMarket,
}

impl GraphFormat {
    /// Detects the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("edges") => Ok(Self::EdgeList),
            Some("mtx") => Ok(Self::MatrixMarket),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Returns true if vertex labels in this format start at 1.
    pub fn is_one_indexed(self) -> bool {
        matches!(self, Self::MatrixMarket)
    }

    /// Returns true if the first data line is a header to skip.
    pub fn has_header(self) -> bool {
        matches!(self, Self::MatrixMarket)
    }

    /// Returns true if a trimmed line is a comment in this dialect.
    ///
    /// Matrix Market only knows `%` comments; edge lists also accept `#`.
    pub fn is_comment(self, line: &str) -> bool {
        match self {
            Self::EdgeList => line.starts_with('#') || line.starts_with('%'),
            Self::MatrixMarket => line.starts_with('%'),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeList => f.write_str("edge list"),
            Self::MatrixMarket => f.write_str("matrix market"),
        }
    }
}
