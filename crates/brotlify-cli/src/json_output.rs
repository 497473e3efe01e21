//! JSON output structures for brotlify CLI

use brotlify_types::RunTotals;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Summary of a finished run in JSON form
#[derive(Debug, Serialize, Deserialize)]
pub struct RunSummaryJson {
    /// brotlify version
    pub version: String,
    /// Root path that was walked
    pub root: String,
    /// Raw accumulator values
    pub totals: RunTotals,
    /// Bytes saved by the written siblings
    pub saved_bytes: u64,
    /// Output bytes as a percentage of source bytes
    pub ratio_percent: f64,
}

impl RunSummaryJson {
    /// Build the summary for `root` from the run's totals
    pub fn new(root: &Path, totals: &RunTotals) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            root: root.display().to_string(),
            totals: *totals,
            saved_bytes: totals.saved_bytes(),
            ratio_percent: totals.ratio() * 100.0,
        }
    }
}
