//! Directory walk and per-file transformation
//!
//! [`Brotlifier::run`] applies two error policies at two call sites. Entries
//! the walker cannot visit are reported and skipped. Files that fail to read,
//! compress or write end the run with that error.

use brotlify_compression::{Algorithm, BrotliAlgorithm};
use brotlify_types::{
    CompressionLevel, Error, FileOutcome, FileRecord, ProgressReporter, Result, RunTotals,
};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::policy::{extension_of, should_skip};

/// Recursively writes `.br` siblings for every compressible file under a root
///
/// One instance accumulates totals for the runs it performs; create a fresh
/// one per independent run.
pub struct Brotlifier {
    algorithm: Box<dyn Algorithm + Send + Sync>,
    level: CompressionLevel,
    totals: RunTotals,
}

impl Brotlifier {
    /// Create a brotlifier using brotli at its best quality
    pub fn new() -> Self {
        Self::with_algorithm(Box::new(BrotliAlgorithm))
    }

    /// Create a brotlifier around another encoder
    pub fn with_algorithm(algorithm: Box<dyn Algorithm + Send + Sync>) -> Self {
        Self {
            algorithm,
            level: CompressionLevel::best(),
            totals: RunTotals::new(),
        }
    }

    /// Totals accumulated so far
    pub fn totals(&self) -> &RunTotals {
        &self.totals
    }

    /// Walk `root` and process every regular file below it
    ///
    /// Returns the first per-file error; no further entries are visited after
    /// it. Traversal errors go to `reporter` and never fail the run.
    pub fn run(&mut self, root: &Path, reporter: &mut dyn ProgressReporter) -> Result<()> {
        info!(
            "brotlifying {} with {}",
            root.display(),
            self.algorithm.name()
        );
        reporter.run_started(root);

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(root).to_path_buf();
                    report_traversal_error(reporter, &Error::traversal(path, err.to_string()));
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }

            if file_type.is_symlink() {
                match fs::metadata(entry.path()) {
                    Ok(meta) if meta.is_file() => {}
                    Ok(_) => {
                        debug!("Not following link {}", entry.path().display());
                        continue;
                    }
                    Err(err) => {
                        report_traversal_error(
                            reporter,
                            &Error::traversal(entry.path(), err.to_string()),
                        );
                        continue;
                    }
                }
            } else if !file_type.is_file() {
                debug!("Ignoring special file {}", entry.path().display());
                continue;
            }

            self.process_file(entry.path(), reporter)?;
        }

        info!(
            "Finished {}: {} -> {} bytes over {} files",
            root.display(),
            self.totals.total_source_bytes,
            self.totals.total_output_bytes,
            self.totals.files_processed()
        );
        reporter.run_finished(&self.totals);
        Ok(())
    }

    /// Compress one file and write its sibling if that saves space
    pub fn process_file(
        &mut self,
        path: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<FileOutcome> {
        let file_name = path.file_name().unwrap_or_else(|| OsStr::new(""));
        let name = file_name.to_string_lossy().into_owned();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        reporter.file_visited(&dir, &name);

        let extension = extension_of(file_name);
        if should_skip(&extension) {
            debug!("Skipping {} by extension", path.display());
            return Ok(FileOutcome::SkippedByExtension);
        }

        let raw = fs::read(path).map_err(|e| Error::read("fs::read", path, &e))?;
        let compressed = self.algorithm.compress(&raw, self.level)?;

        let record = FileRecord {
            path: path.to_path_buf(),
            extension: extension.into_owned(),
            raw_size: raw.len() as u64,
            compressed_size: compressed.len() as u64,
            dir,
            name,
        };
        reporter.file_processed(&record);

        if !record.shrinks() {
            debug!(
                "{} does not shrink ({} -> {} bytes)",
                path.display(),
                record.raw_size,
                record.compressed_size
            );
            reporter.compression_skipped(&record);
            self.totals.record_not_smaller(record.raw_size);
            return Ok(FileOutcome::NotSmaller(record));
        }

        self.totals
            .record_compressed(record.raw_size, record.compressed_size);

        let output = record.output_path();
        write_output(&output, &compressed).map_err(|e| Error::write("fs::write", &output, &e))?;
        debug!("Wrote {}", output.display());

        Ok(FileOutcome::Compressed(record))
    }
}

impl Default for Brotlifier {
    fn default() -> Self {
        Self::new()
    }
}

fn report_traversal_error(reporter: &mut dyn ProgressReporter, error: &Error) {
    let path = error.path().unwrap_or_else(|| Path::new(""));
    warn!("Cannot visit {}: {}", path.display(), error);
    reporter.traversal_error(path, error);
}

#[cfg(unix)]
fn write_output(path: &Path, data: &[u8]) -> io::Result<()> {
    use brotlify_types::OUTPUT_MODE;
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(OUTPUT_MODE)
        .open(path)?;
    file.write_all(data)
}

#[cfg(not(unix))]
fn write_output(path: &Path, data: &[u8]) -> io::Result<()> {
    fs::write(path, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brotlify_types::{ErrorKind, NullReporter};
    use tempfile::TempDir;

    #[derive(Default)]
    struct Events {
        visited: Vec<String>,
        processed: Vec<FileRecord>,
        skipped: Vec<FileRecord>,
        errors: Vec<PathBuf>,
        finished: Option<RunTotals>,
    }

    impl ProgressReporter for Events {
        fn run_started(&mut self, _root: &Path) {}

        fn file_visited(&mut self, _dir: &Path, name: &str) {
            self.visited.push(name.to_string());
        }

        fn file_processed(&mut self, record: &FileRecord) {
            self.processed.push(record.clone());
        }

        fn compression_skipped(&mut self, record: &FileRecord) {
            self.skipped.push(record.clone());
        }

        fn traversal_error(&mut self, path: &Path, _error: &Error) {
            self.errors.push(path.to_path_buf());
        }

        fn run_finished(&mut self, totals: &RunTotals) {
            self.finished = Some(*totals);
        }
    }

    struct FailingAlgorithm;

    impl Algorithm for FailingAlgorithm {
        fn compress(&self, _data: &[u8], _level: CompressionLevel) -> Result<Vec<u8>> {
            Err(Error::compression("compressing brotli", "encoder exploded"))
        }

        fn decompress(&self, _data: &[u8]) -> Result<Vec<u8>> {
            Err(Error::compression("decompressing brotli", "encoder exploded"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_compressible_file_gets_sibling() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.txt");
        fs::write(&source, vec![b'x'; 10_000]).unwrap();

        let mut brotlifier = Brotlifier::new();
        let mut events = Events::default();
        let outcome = brotlifier.process_file(&source, &mut events).unwrap();

        let record = match outcome {
            FileOutcome::Compressed(record) => record,
            other => panic!("expected compressed outcome, got {:?}", other),
        };
        let written = fs::read(temp_dir.path().join("a.txt.br")).unwrap();
        assert_eq!(written.len() as u64, record.compressed_size);
        assert_eq!(BrotliAlgorithm.decompress(&written).unwrap(), vec![b'x'; 10_000]);
        assert_eq!(fs::read(&source).unwrap().len(), 10_000);

        assert_eq!(brotlifier.totals().total_source_bytes, 10_000);
        assert_eq!(brotlifier.totals().total_output_bytes, record.compressed_size);
        assert_eq!(events.processed.len(), 1);
        assert!(events.skipped.is_empty());
    }

    #[test]
    fn test_tiny_file_is_not_written() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("one.txt");
        fs::write(&source, b"a").unwrap();

        let mut brotlifier = Brotlifier::new();
        let mut events = Events::default();
        let outcome = brotlifier.process_file(&source, &mut events).unwrap();

        assert!(matches!(outcome, FileOutcome::NotSmaller(_)));
        assert!(!temp_dir.path().join("one.txt.br").exists());
        assert_eq!(brotlifier.totals().total_source_bytes, 1);
        assert_eq!(brotlifier.totals().total_output_bytes, 1);
        assert_eq!(events.skipped.len(), 1);
    }

    #[test]
    fn test_empty_file_is_not_written() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("empty.css");
        fs::write(&source, b"").unwrap();

        let mut brotlifier = Brotlifier::new();
        let outcome = brotlifier.process_file(&source, &mut NullReporter).unwrap();

        assert!(matches!(outcome, FileOutcome::NotSmaller(_)));
        assert!(!temp_dir.path().join("empty.css.br").exists());
        assert_eq!(*brotlifier.totals(), {
            let mut expected = RunTotals::new();
            expected.record_not_smaller(0);
            expected
        });
    }

    #[test]
    fn test_skipped_extension_is_not_read() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("photo.PNG");

        let mut brotlifier = Brotlifier::new();
        let mut events = Events::default();
        let outcome = brotlifier.process_file(&missing, &mut events).unwrap();

        assert_eq!(outcome, FileOutcome::SkippedByExtension);
        assert_eq!(events.visited, vec!["photo.PNG".to_string()]);
        assert!(events.processed.is_empty());
        assert_eq!(brotlifier.totals().files_processed(), 0);
    }

    #[test]
    fn test_unreadable_file_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone.txt");

        let mut brotlifier = Brotlifier::new();
        let error = brotlifier
            .process_file(&missing, &mut NullReporter)
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Read);
        assert_eq!(error.operation(), Some("fs::read"));
        assert_eq!(error.path(), Some(missing.as_path()));
    }

    #[test]
    fn test_compression_failure_aborts_run() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), b"hello").unwrap();
        fs::write(temp_dir.path().join("b.txt"), b"world").unwrap();

        let mut brotlifier = Brotlifier::with_algorithm(Box::new(FailingAlgorithm));
        let mut events = Events::default();
        let error = brotlifier.run(temp_dir.path(), &mut events).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Compression);
        assert_eq!(events.visited, vec!["a.txt".to_string()]);
        assert!(events.finished.is_none());
    }

    #[test]
    fn test_write_failure_is_a_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.txt");
        fs::write(&source, vec![b'x'; 4096]).unwrap();
        fs::create_dir(temp_dir.path().join("a.txt.br")).unwrap();

        let mut brotlifier = Brotlifier::new();
        let error = brotlifier
            .process_file(&source, &mut NullReporter)
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Write);
        assert_eq!(error.operation(), Some("fs::write"));
        let output = temp_dir.path().join("a.txt.br");
        assert_eq!(error.path(), Some(output.as_path()));
        assert!(error
            .to_string()
            .starts_with(&format!("fs::write {}: ", output.display())));
    }

    #[test]
    fn test_relative_file_without_parent_uses_dot() {
        let mut brotlifier = Brotlifier::new();
        let mut events = Events::default();
        let outcome = brotlifier
            .process_file(Path::new("clip.mp4"), &mut events)
            .unwrap();

        assert_eq!(outcome, FileOutcome::SkippedByExtension);
        assert_eq!(events.visited, vec!["clip.mp4".to_string()]);
    }

    #[test]
    fn test_missing_root_is_tolerated() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("does-not-exist");

        let mut brotlifier = Brotlifier::new();
        let mut events = Events::default();
        brotlifier.run(&root, &mut events).unwrap();

        assert_eq!(events.errors, vec![root]);
        assert_eq!(events.finished, Some(RunTotals::new()));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_a_traversal_error() {
        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("dangling.txt");
        std::os::unix::fs::symlink(temp_dir.path().join("nowhere"), &link).unwrap();
        fs::write(temp_dir.path().join("z.txt"), vec![b'z'; 2048]).unwrap();

        let mut brotlifier = Brotlifier::new();
        let mut events = Events::default();
        brotlifier.run(temp_dir.path(), &mut events).unwrap();

        assert_eq!(events.errors, vec![link]);
        assert!(temp_dir.path().join("z.txt.br").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_keeps_its_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join(OsStr::from_bytes(b"caf\xE9.txt"));
        fs::write(&source, vec![b'c'; 5000]).unwrap();

        let mut brotlifier = Brotlifier::new();
        let mut events = Events::default();
        brotlifier.run(temp_dir.path(), &mut events).unwrap();

        let output = temp_dir.path().join(OsStr::from_bytes(b"caf\xE9.txt.br"));
        assert!(output.is_file());
        assert_eq!(events.processed.len(), 1);
        assert_eq!(events.processed[0].extension, ".txt");
        assert_eq!(events.processed[0].output_path(), output);

        let mut names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                source.file_name().unwrap().to_os_string(),
                output.file_name().unwrap().to_os_string(),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_output_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.txt");
        fs::write(&source, vec![b'x'; 4096]).unwrap();

        Brotlifier::new()
            .process_file(&source, &mut NullReporter)
            .unwrap();

        let mode = fs::metadata(temp_dir.path().join("a.txt.br"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o002, 0);
        assert_eq!(mode & 0o111, 0);
    }
}
