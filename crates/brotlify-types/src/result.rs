//! Result type alias for brotlify operations

use crate::Error;

/// Result type alias for brotlify operations
pub type Result<T> = std::result::Result<T, Error>;
