//! Walk-and-compress engine for brotlify
//!
//! This crate walks a directory tree and writes a brotli-compressed sibling
//! next to every file that gets smaller when compressed:
//!
//! - **Extension policy**: media and archive formats are never touched
//! - **Best-effort traversal**: unreadable entries are reported and skipped
//! - **Fail-fast processing**: a file that cannot be read, compressed or
//!   written stops the run
//! - **Accounting**: source and output byte totals for the whole run
//!
//! # Examples
//!
//! ```rust,no_run
//! use brotlify_engine::Brotlifier;
//! use brotlify_types::NullReporter;
//! use std::path::Path;
//!
//! # fn example() -> brotlify_types::Result<()> {
//! let mut brotlifier = Brotlifier::new();
//! brotlifier.run(Path::new("public"), &mut NullReporter)?;
//! println!("saved {} bytes", brotlifier.totals().saved_bytes());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod policy;
pub mod walker;

pub use policy::{extension_of, should_skip, SKIPPED_EXTENSIONS};
pub use walker::Brotlifier;
