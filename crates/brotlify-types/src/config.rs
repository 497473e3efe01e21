//! Build-time configuration for brotlify
//!
//! The tool has no configuration file. Everything that shapes its output is
//! fixed here so that repeated runs over the same tree behave identically.

/// Suffix appended to a file name to form its compressed sibling
pub const OUTPUT_SUFFIX: &str = ".br";

/// Permission bits of written compressed files (Unix only)
pub const OUTPUT_MODE: u32 = 0o664;

/// Brotli sliding window size, as a base-2 logarithm
pub const BROTLI_LG_WINDOW: u32 = 22;

/// Internal buffer size handed to the brotli encoder and decoder
pub const BROTLI_BUFFER_SIZE: usize = 4096;

/// Brotli quality level with validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    /// Fastest compression
    pub const FASTEST: u8 = 0;
    /// Best compression
    pub const BEST: u8 = 11;

    /// Create a new compression level with validation
    pub fn new(level: u8) -> Result<Self, String> {
        if level > Self::BEST {
            Err(format!(
                "Compression level {} exceeds maximum {}",
                level,
                Self::BEST
            ))
        } else {
            Ok(Self(level))
        }
    }

    /// The level every run uses
    pub const fn best() -> Self {
        Self(Self::BEST)
    }

    /// Get the compression level value
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::best()
    }
}
