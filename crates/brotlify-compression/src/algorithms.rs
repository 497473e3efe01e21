//! Compression algorithm implementations

use brotlify_types::{CompressionLevel, Error, Result, BROTLI_BUFFER_SIZE, BROTLI_LG_WINDOW};
use std::io::Read;
use tracing::trace;

/// Trait for compression algorithm implementations
pub trait Algorithm {
    /// Compress the whole of `data` at the given level
    fn compress(&self, data: &[u8], level: CompressionLevel) -> Result<Vec<u8>>;

    /// Decompress a complete stream produced by [`Algorithm::compress`]
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Brotli compression implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct BrotliAlgorithm;

impl BrotliAlgorithm {
    /// Encode everything `input` yields into one finished brotli stream
    fn encode<R: Read>(input: &mut R, level: CompressionLevel) -> Result<Vec<u8>> {
        let params = brotli::enc::BrotliEncoderParams {
            quality: i32::from(level.get()),
            lgwin: BROTLI_LG_WINDOW as i32,
            ..Default::default()
        };

        let mut compressed = Vec::new();
        brotli::BrotliCompress(input, &mut compressed, &params)
            .map_err(|e| Error::compression("compressing brotli", e.to_string()))?;
        Ok(compressed)
    }
}

impl Algorithm for BrotliAlgorithm {
    fn compress(&self, data: &[u8], level: CompressionLevel) -> Result<Vec<u8>> {
        let mut input = data;
        let compressed = Self::encode(&mut input, level)?;
        trace!(
            raw = data.len(),
            compressed = compressed.len(),
            quality = level.get(),
            "brotli stream finished"
        );
        Ok(compressed)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut decompressed = Vec::new();
        let mut decompressor = brotli::Decompressor::new(data, BROTLI_BUFFER_SIZE);

        decompressor
            .read_to_end(&mut decompressed)
            .map_err(|e| Error::compression("decompressing brotli", e.to_string()))?;

        Ok(decompressed)
    }

    fn name(&self) -> &'static str {
        "brotli"
    }
}
