//! Error types and handling for brotlify
//!
//! Two policies live side by side. Traversal errors describe a single
//! directory entry that could not be visited; the walker logs them and moves
//! on. Read, compression and write errors describe a file that was being
//! transformed; they abort the run and reach the caller unchanged.

use std::path::{Path, PathBuf};

/// Main error type for brotlify operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A directory entry could not be visited
    #[error("{message}")]
    Traversal {
        /// Path of the offending entry
        path: PathBuf,
        /// Error message reported by the directory walker
        message: String,
    },

    /// Reading a source file failed
    #[error("{operation} {}: {message}", .path.display())]
    Read {
        /// Operation that failed
        operation: &'static str,
        /// File that was being read
        path: PathBuf,
        /// Error message from the I/O operation
        message: String,
    },

    /// The compressor failed to encode or finish the stream
    #[error("{operation}: {message}")]
    Compression {
        /// Operation that failed
        operation: &'static str,
        /// Error message describing the compression issue
        message: String,
    },

    /// Writing the compressed sibling failed
    #[error("{operation} {}: {message}", .path.display())]
    Write {
        /// Operation that failed
        operation: &'static str,
        /// File that was being written
        path: PathBuf,
        /// Error message from the I/O operation
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Directory traversal errors
    Traversal,
    /// Source read errors
    Read,
    /// Compression errors
    Compression,
    /// Output write errors
    Write,
}

impl Error {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Traversal { .. } => ErrorKind::Traversal,
            Self::Read { .. } => ErrorKind::Read,
            Self::Compression { .. } => ErrorKind::Compression,
            Self::Write { .. } => ErrorKind::Write,
        }
    }

    /// Whether this error aborts the whole run
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Traversal { .. })
    }

    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Traversal { path, .. } | Self::Read { path, .. } | Self::Write { path, .. } => {
                Some(path)
            }
            Self::Compression { .. } => None,
        }
    }

    /// Name of the operation that failed, if recorded
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Read { operation, .. }
            | Self::Compression { operation, .. }
            | Self::Write { operation, .. } => Some(operation),
            Self::Traversal { .. } => None,
        }
    }

    /// Create a new traversal error
    pub fn traversal<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Traversal {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new read error from an I/O failure
    pub fn read<P: Into<PathBuf>>(operation: &'static str, path: P, error: &std::io::Error) -> Self {
        Self::Read {
            operation,
            path: path.into(),
            message: error.to_string(),
        }
    }

    /// Create a new compression error
    pub fn compression<S: Into<String>>(operation: &'static str, message: S) -> Self {
        Self::Compression {
            operation,
            message: message.into(),
        }
    }

    /// Create a new write error from an I/O failure
    pub fn write<P: Into<PathBuf>>(operation: &'static str, path: P, error: &std::io::Error) -> Self {
        Self::Write {
            operation,
            path: path.into(),
            message: error.to_string(),
        }
    }
}
