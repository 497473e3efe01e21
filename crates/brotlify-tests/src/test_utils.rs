//! Test fixtures and a reporter that records every event

use brotlify_types::{Error, FileRecord, ProgressReporter, RunTotals};
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One call made on a [`RecordingReporter`]
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// `run_started`
    Started(PathBuf),
    /// `file_visited`, carrying the full path
    Visited(PathBuf),
    /// `file_processed`
    Processed(FileRecord),
    /// `compression_skipped`
    NotSmaller(FileRecord),
    /// `traversal_error`
    TraversalError(PathBuf),
    /// `run_finished`
    Finished(RunTotals),
}

/// Reporter keeping every event in order
#[derive(Debug, Default)]
pub struct RecordingReporter {
    /// Events in the order they were reported
    pub events: Vec<Event>,
}

impl RecordingReporter {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths of every visited file, in order
    pub fn visited(&self) -> Vec<PathBuf> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Visited(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    /// Records of files that went through compression
    pub fn processed(&self) -> Vec<&FileRecord> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Processed(record) => Some(record),
                _ => None,
            })
            .collect()
    }

    /// Paths reported as traversal errors
    pub fn traversal_errors(&self) -> Vec<PathBuf> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::TraversalError(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether `run_finished` was reported
    pub fn finished(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, Event::Finished(_)))
    }
}

impl ProgressReporter for RecordingReporter {
    fn run_started(&mut self, root: &Path) {
        self.events.push(Event::Started(root.to_path_buf()));
    }

    fn file_visited(&mut self, dir: &Path, name: &str) {
        self.events.push(Event::Visited(dir.join(name)));
    }

    fn file_processed(&mut self, record: &FileRecord) {
        self.events.push(Event::Processed(record.clone()));
    }

    fn compression_skipped(&mut self, record: &FileRecord) {
        self.events.push(Event::NotSmaller(record.clone()));
    }

    fn traversal_error(&mut self, path: &Path, _error: &Error) {
        self.events.push(Event::TraversalError(path.to_path_buf()));
    }

    fn run_finished(&mut self, totals: &RunTotals) {
        self.events.push(Event::Finished(*totals));
    }
}

/// Write `size` copies of one byte to `path`, creating parent directories
pub fn create_repetitive_file(path: &Path, size: usize) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, vec![b'A'; size])
}

/// Write `size` pseudo-random bytes to `path`, creating parent directories
///
/// The content is deterministic for a given size and does not compress.
pub fn create_random_file(path: &Path, size: usize) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut content = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();
    for i in 0..size {
        i.hash(&mut hasher);
        content.push((hasher.finish() >> 24) as u8);
    }

    fs::write(path, content)
}

/// Every file under `root`, sorted
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| !entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}
