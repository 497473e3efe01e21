//! Console output for brotlify runs

use brotlify_types::{Error, FileRecord, ProgressReporter, RunTotals};
use console::style;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::json_output::RunSummaryJson;

/// What to print once a run completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    /// Nothing beyond the per-file lines
    #[default]
    None,
    /// One `total:` line
    Text,
    /// A JSON document
    Json,
}

/// Reporter printing the per-file lines to standard output
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    summary: SummaryFormat,
    root: PathBuf,
}

impl ConsoleReporter {
    /// Create a reporter with the given end-of-run summary
    pub fn new(summary: SummaryFormat) -> Self {
        Self {
            summary,
            root: PathBuf::new(),
        }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn run_started(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        println!("{}", banner_line(root));
    }

    fn file_visited(&mut self, dir: &Path, name: &str) {
        println!("{}", visit_line(dir, name));
    }

    fn file_processed(&mut self, record: &FileRecord) {
        println!("{}", sizes_line(record));
    }

    fn compression_skipped(&mut self, _record: &FileRecord) {
        println!("    {}", style("skipped").yellow());
    }

    fn traversal_error(&mut self, path: &Path, error: &Error) {
        println!("{}", path.display());
        println!("   {} {}", style("error:").red(), error);
    }

    fn run_finished(&mut self, totals: &RunTotals) {
        match self.summary {
            SummaryFormat::None => debug!("Run finished, summary not requested"),
            SummaryFormat::Text => println!("{}", total_line(totals)),
            SummaryFormat::Json => match serde_json::to_string_pretty(&RunSummaryJson::new(
                &self.root, totals,
            )) {
                Ok(json) => println!("{}", json),
                Err(e) => display_error(&format!("Cannot encode summary: {}", e)),
            },
        }
    }
}

/// First line of every run
pub fn banner_line(root: &Path) -> String {
    format!("brotlifying {}", root.display())
}

/// Line naming a visited file
pub fn visit_line(dir: &Path, name: &str) -> String {
    format!("{} {}", dir.display(), name)
}

/// Indented sizes and ratio of a compressed file
pub fn sizes_line(record: &FileRecord) -> String {
    format!(
        "    {} -> {}   {}",
        format_bytes(record.raw_size),
        format_bytes(record.compressed_size),
        format_percent(record.percent())
    )
}

/// Totals of a finished run
pub fn total_line(totals: &RunTotals) -> String {
    format!(
        "total: {} -> {}   {}",
        format_bytes(totals.total_source_bytes),
        format_bytes(totals.total_output_bytes),
        format_percent(totals.ratio() * 100.0)
    )
}

/// Whole-number percentage; a ratio over an empty source reads `+Inf%`
pub fn format_percent(percent: f64) -> String {
    if percent.is_infinite() {
        "+Inf%".to_string()
    } else {
        format!("{:.0}%", percent)
    }
}

/// Format bytes in human-readable SI units
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB", "EB"];

    if bytes < 10 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;
    while size >= 1000.0 && unit_index < UNITS.len() - 1 {
        size /= 1000.0;
        unit_index += 1;
    }

    let rounded = (size * 10.0 + 0.5).floor() / 10.0;
    if rounded < 10.0 {
        format!("{:.1} {}", rounded, UNITS[unit_index])
    } else {
        format!("{:.0} {}", rounded, UNITS[unit_index])
    }
}

/// Display an error message with proper formatting
pub fn display_error(message: &str) {
    println!("{} {}", style("Error:").red().bold(), message);
}
