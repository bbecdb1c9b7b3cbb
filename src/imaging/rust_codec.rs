//! Pure Rust codec backed by the `image` crate — zero external dependencies.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Encode → PNG | `image` PNG encoder (lossless, keeps alpha) |
//! | Encode → JPEG | `image` JPEG encoder (lossy, RGB only) |
//!
//! Resampling lives on [`PixelBuffer`](super::codec::PixelBuffer)
//! (`resize_exact` with Lanczos3) — the codec proper is just the two disk
//! crossings.

use super::codec::{CodecError, ImageCodec, PixelBuffer};
use super::params::OutputFormat;
use image::{ImageFormat, ImageReader};
use std::path::Path;

/// Production codec. Stateless; construct one per run.
pub struct RustCodec;

impl RustCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for RustCodec {
    fn decode(&self, path: &Path) -> Result<PixelBuffer, CodecError> {
        let image = ImageReader::open(path)
            .map_err(CodecError::Io)?
            .decode()
            .map_err(|e| CodecError::Decode(format!("{}: {}", path.display(), e)))?;
        Ok(PixelBuffer::new(image))
    }

    fn encode(
        &self,
        buffer: &PixelBuffer,
        output: &Path,
        format: OutputFormat,
    ) -> Result<(), CodecError> {
        let target = match format {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
        };
        buffer
            .as_image()
            .save_with_format(output, target)
            .map_err(|e| CodecError::Encode(format!("{}: {}", output.display(), e)))
    }
}
