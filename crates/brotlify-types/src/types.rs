//! Core data types for brotlify
//!
//! This module provides the run-wide accounting and the per-file record the
//! walker produces for every file it compresses.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::OUTPUT_SUFFIX;

/// File size in bytes
pub type FileSize = u64;

/// Byte counters for one run over one root path
///
/// Both counters only ever grow. A file whose compressed form is not smaller
/// contributes its original size to both sides, so the aggregate ratio stays
/// meaningful for trees full of incompressible data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunTotals {
    /// Bytes read from every processed file
    pub total_source_bytes: u64,
    /// Bytes those files effectively occupy after the run
    pub total_output_bytes: u64,
    /// Number of compressed siblings written
    pub files_compressed: u64,
    /// Number of files whose compressed form was discarded
    pub files_not_smaller: u64,
}

impl RunTotals {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for a file whose compressed form was kept
    pub fn record_compressed(&mut self, raw_size: FileSize, compressed_size: FileSize) {
        self.total_source_bytes += raw_size;
        self.total_output_bytes += compressed_size;
        self.files_compressed += 1;
    }

    /// Account for a file whose compressed form was discarded
    pub fn record_not_smaller(&mut self, raw_size: FileSize) {
        self.total_source_bytes += raw_size;
        self.total_output_bytes += raw_size;
        self.files_not_smaller += 1;
    }

    /// Bytes saved across the run
    pub fn saved_bytes(&self) -> u64 {
        self.total_source_bytes
            .saturating_sub(self.total_output_bytes)
    }

    /// Output bytes divided by source bytes, 0 when nothing was processed
    pub fn ratio(&self) -> f64 {
        if self.total_source_bytes == 0 {
            0.0
        } else {
            self.total_output_bytes as f64 / self.total_source_bytes as f64
        }
    }

    /// Number of files that went through compression
    pub fn files_processed(&self) -> u64 {
        self.files_compressed + self.files_not_smaller
    }
}

/// Sizes measured for one compressed file
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileRecord {
    /// Path of the source file as yielded by the walker
    pub path: PathBuf,
    /// Directory containing the file
    pub dir: PathBuf,
    /// Base name of the file
    pub name: String,
    /// Extension including the leading dot, empty if none
    pub extension: String,
    /// Length of the source content
    pub raw_size: FileSize,
    /// Length of the compressed content
    pub compressed_size: FileSize,
}

impl FileRecord {
    /// Compressed size divided by raw size
    ///
    /// Zero when the compressed output is empty. Values at or above 1.0 mean
    /// compression did not help.
    pub fn ratio(&self) -> f64 {
        if self.compressed_size == 0 {
            0.0
        } else {
            self.compressed_size as f64 / self.raw_size as f64
        }
    }

    /// Ratio as a percentage
    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }

    /// Whether the compressed form is strictly smaller than the source
    pub fn shrinks(&self) -> bool {
        self.compressed_size < self.raw_size
    }

    /// Where the compressed sibling goes
    pub fn output_path(&self) -> PathBuf {
        output_path_for(&self.path)
    }
}

/// Sibling path `<source><suffix>` for a source file
///
/// Built on the raw OS string so names that are not valid UTF-8 keep their
/// exact bytes.
pub fn output_path_for(source: &Path) -> PathBuf {
    let mut output = source.as_os_str().to_owned();
    output.push(OUTPUT_SUFFIX);
    PathBuf::from(output)
}

/// What happened to a file handed to the transformer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FileOutcome {
    /// The extension is on the skip list; the file was not read
    SkippedByExtension,
    /// Compression did not shrink the file; nothing was written
    NotSmaller(FileRecord),
    /// The compressed sibling was written
    Compressed(FileRecord),
}
