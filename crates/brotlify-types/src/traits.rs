//! Core traits for brotlify operations
//!
//! The walker never writes to the terminal itself. Everything a user sees goes
//! through a [`ProgressReporter`], which keeps runs testable and lets library
//! callers stay silent.

use crate::{Error, FileRecord, RunTotals};
use std::path::Path;

/// Trait for reporting progress during a run
pub trait ProgressReporter {
    /// A run over `root` is starting
    fn run_started(&mut self, root: &Path);

    /// A non-directory entry was reached
    fn file_visited(&mut self, dir: &Path, name: &str);

    /// A file went through compression; sizes are known
    fn file_processed(&mut self, record: &FileRecord);

    /// The compressed form of a file was not smaller and was discarded
    fn compression_skipped(&mut self, record: &FileRecord);

    /// A directory entry could not be visited; the run continues
    fn traversal_error(&mut self, path: &Path, error: &Error);

    /// The run finished without a fatal error
    fn run_finished(&mut self, totals: &RunTotals);
}

/// Reporter that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn run_started(&mut self, _root: &Path) {}

    fn file_visited(&mut self, _dir: &Path, _name: &str) {}

    fn file_processed(&mut self, _record: &FileRecord) {}

    fn compression_skipped(&mut self, _record: &FileRecord) {}

    fn traversal_error(&mut self, _path: &Path, _error: &Error) {}

    fn run_finished(&mut self, _totals: &RunTotals) {}
}
