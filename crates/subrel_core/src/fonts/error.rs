//! Font loading error types.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading a font file.
///
/// These never abort catalog construction; they are collected on the
/// catalog for the operator to review.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to read the font file.
    #[error("Failed to read font '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a parsable font face.
    #[error("Failed to parse face {face_index} of '{path}': {reason}")]
    Parse {
        path: PathBuf,
        face_index: u32,
        reason: String,
    },

    /// A table required for validation is absent.
    #[error("Face {face_index} of '{path}' has no '{table}' table")]
    MissingTable {
        path: PathBuf,
        face_index: u32,
        table: &'static str,
    },
}

impl FontError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(path: impl Into<PathBuf>, face_index: u32, reason: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            face_index,
            reason: reason.to_string(),
        }
    }

    /// Create a missing table error.
    pub fn missing_table(path: impl Into<PathBuf>, face_index: u32, table: &'static str) -> Self {
        Self::MissingTable {
            path: path.into(),
            face_index,
            table,
        }
    }

    /// Path of the offending file.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::MissingTable { path, .. } => {
                path
            }
        }
    }
}
