//! Errors surfaced by a remap pass

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error that can occur while remapping a glyph table
#[derive(Debug)]
pub enum RemapError {
    /// Reading the input stream failed
    Read(io::Error),
    /// Writing the output stream failed
    Write(io::Error),
    /// Opening, creating or replacing a file failed
    Io { path: PathBuf, source: io::Error },
    /// A shifted index went below zero under the reject policy
    NegativeIndex { line: usize, index: i64 },
    /// The remap rules cannot be applied
    InvalidRules(String),
}

impl RemapError {
    /// Attach file paths to stream errors raised during a file pass.
    pub(crate) fn at_paths(self, input: &Path, output: &Path) -> Self {
        match self {
            RemapError::Read(source) => RemapError::Io {
                path: input.to_path_buf(),
                source,
            },
            RemapError::Write(source) => RemapError::Io {
                path: output.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

impl fmt::Display for RemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemapError::Read(err) => write!(f, "Read error: {}", err),
            RemapError::Write(err) => write!(f, "Write error: {}", err),
            RemapError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            RemapError::NegativeIndex { line, index } => {
                write!(f, "Line {} remaps to negative index {}", line, index)
            }
            RemapError::InvalidRules(msg) => write!(f, "Invalid remap rules: {}", msg),
        }
    }
}

impl std::error::Error for RemapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RemapError::Read(err) | RemapError::Write(err) => Some(err),
            RemapError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
