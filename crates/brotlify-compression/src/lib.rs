//! Brotli encoding for brotlify
//!
//! The walker treats compression as an opaque function from bytes to bytes at
//! a quality level. This crate provides that function behind the
//! [`Algorithm`] trait so other encoders can stand in for it in tests.
//!
//! # Examples
//!
//! ```rust
//! use brotlify_compression::{Algorithm, BrotliAlgorithm};
//! use brotlify_types::CompressionLevel;
//!
//! let algo = BrotliAlgorithm;
//! let data = b"Hello, world! Hello, world! Hello, world! Hello, world!";
//!
//! let compressed = algo.compress(data, CompressionLevel::best())?;
//! let decompressed = algo.decompress(&compressed)?;
//!
//! assert_eq!(data, decompressed.as_slice());
//! # Ok::<(), brotlify_types::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;

pub use algorithms::{Algorithm, BrotliAlgorithm};
