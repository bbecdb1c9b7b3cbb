//! Image codec seam and the decoded-buffer type.
//!
//! The codec is the pipeline's only pixel-level collaborator: it decodes a
//! source file into a [`PixelBuffer`] and encodes finished tiles back to
//! disk. Everything between those two calls — resampling, cropping, alpha
//! flattening — is a deterministic operation on the buffer itself.
//!
//! The production implementation is
//! [`RustCodec`](super::rust_codec::RustCodec). Tests use the recording
//! mock in this module so pipeline logic can be exercised without encoding
//! a single real pixel.

use super::geometry::TileBoundary;
use super::params::{Normalization, OutputFormat};
use image::DynamicImage;
use image::imageops::FilterType;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// A decoded image held in memory.
///
/// Wraps the `image` crate's [`DynamicImage`]. The orchestrator owns every
/// buffer it decodes for the duration of the run; dropping the buffer is
/// the release, on success and failure paths alike.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    image: DynamicImage,
}

impl PixelBuffer {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whether the pixel format carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }

    pub fn as_image(&self) -> &DynamicImage {
        &self.image
    }

    /// Resample to exactly `width` × `height` with a Lanczos3 filter.
    pub fn resize(&self, width: u32, height: u32) -> PixelBuffer {
        Self::new(self.image.resize_exact(width, height, FilterType::Lanczos3))
    }

    /// Extract the full-width row range `[boundary.top, boundary.bottom)`.
    pub fn crop_rows(&self, boundary: TileBoundary) -> PixelBuffer {
        Self::new(
            self.image
                .crop_imm(0, boundary.top, self.width(), boundary.height()),
        )
    }

    /// Apply a [`Normalization`] decision.
    pub fn normalize(self, action: Normalization) -> PixelBuffer {
        match action {
            Normalization::PassThrough => self,
            Normalization::FlattenOntoWhite => self.flatten_onto_white(),
        }
    }

    /// Composite translucent pixels onto an opaque white background,
    /// producing an alpha-free RGB buffer.
    pub fn flatten_onto_white(&self) -> PixelBuffer {
        let rgba = self.image.to_rgba8();
        let mut flat = image::RgbImage::new(self.width(), self.height());
        for (x, y, pixel) in rgba.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            let alpha = a as u32;
            let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha)) / 255) as u8;
            flat.put_pixel(x, y, image::Rgb([blend(r), blend(g), blend(b)]));
        }
        Self::new(DynamicImage::ImageRgb8(flat))
    }
}

/// Trait for image codecs.
///
/// Two operations: decode a file into a buffer, encode a buffer to a file.
/// Keeping the trait this narrow means the whole tiling pipeline runs
/// identically against the real codec and the recording mock.
pub trait ImageCodec {
    /// Decode the file at `path` into a pixel buffer.
    fn decode(&self, path: &Path) -> Result<PixelBuffer, CodecError>;

    /// Encode `buffer` to `output` in the given format.
    fn encode(
        &self,
        buffer: &PixelBuffer,
        output: &Path,
        format: OutputFormat,
    ) -> Result<(), CodecError>;
}
