//! Core type system and error handling for brotlify
//!
//! This crate provides the types shared by the brotlify crates:
//!
//! - **Error handling**: one error enum separating tolerated traversal errors
//!   from fatal per-file errors
//! - **Accounting**: [`RunTotals`], the byte counters kept for one run
//! - **Records**: [`FileRecord`] and [`FileOutcome`] describing one file
//! - **Configuration**: build-time constants such as the output suffix and
//!   the brotli quality level
//! - **Traits**: [`ProgressReporter`] for observing a run
//!
//! # Features
//!
//! - `serde`: Enable serialization support
//!
//! # Examples
//!
//! ```rust
//! use brotlify_types::{Result, RunTotals};
//!
//! fn example_run() -> Result<RunTotals> {
//!     let mut totals = RunTotals::new();
//!     totals.record_compressed(10_000, 42);
//!     totals.record_not_smaller(300);
//!     Ok(totals)
//! }
//!
//! let totals = example_run().unwrap();
//! assert_eq!(totals.total_source_bytes, 10_300);
//! assert_eq!(totals.total_output_bytes, 342);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{
    CompressionLevel, BROTLI_BUFFER_SIZE, BROTLI_LG_WINDOW, OUTPUT_MODE, OUTPUT_SUFFIX,
};
pub use error::{Error, ErrorKind};
pub use result::Result;
pub use traits::{NullReporter, ProgressReporter};
pub use types::{output_path_for, FileOutcome, FileRecord, FileSize, RunTotals};
