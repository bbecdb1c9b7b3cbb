//! Parameter and decision types for the tiling pipeline.
//!
//! These types describe *what* to do, not *how* to do it. They are the
//! interface between configuration merging, the pure geometry functions,
//! and the codec that does the actual pixel work.
//!
//! ## Types
//!
//! - [`ResizeSpec`] — how to scale a source before tiling (target width XOR
//!   scale factor, default 2.0).
//! - [`OutputFormat`] — tile encoding, derived from the source extension.
//! - [`Normalization`] — what must happen to a buffer before encoding.

use std::path::Path;

/// How to scale an image before tiling.
///
/// The two ways of expressing a resize are mutually exclusive by
/// construction; conflicting inputs are rejected at config-merge time, not
/// resolved by precedence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeSpec {
    /// Scale uniformly so the output width equals this many pixels.
    TargetWidth(u32),
    /// Multiply both axes by this factor.
    ScaleFactor(f64),
}

impl Default for ResizeSpec {
    /// 2x — the pixel-density convention the markup's `--h` hint assumes.
    fn default() -> Self {
        Self::ScaleFactor(2.0)
    }
}

/// Encoding format for persisted tiles.
///
/// PNG sources keep PNG tiles (lossless, alpha preserved); every other
/// source format is coerced to JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Decide the tile format from a source file's extension.
    pub fn from_source_extension(path: &Path) -> Self {
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if is_png { Self::Png } else { Self::Jpeg }
    }

    /// File extension used for tile filenames and markup URLs.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

/// What must happen to a pixel buffer before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Composite translucent pixels onto an opaque white background.
    /// JPEG has no alpha channel, so alpha-bearing tiles destined for JPEG
    /// must lose it before the encoder sees them.
    FlattenOntoWhite,
    /// Encode as-is.
    PassThrough,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resize_is_2x_scale() {
        assert_eq!(ResizeSpec::default(), ResizeSpec::ScaleFactor(2.0));
    }

    #[test]
    fn png_extension_keeps_png() {
        assert_eq!(
            OutputFormat::from_source_extension(Path::new("images/banner.png")),
            OutputFormat::Png
        );
    }

    #[test]
    fn png_extension_is_case_insensitive() {
        assert_eq!(
            OutputFormat::from_source_extension(Path::new("images/BANNER.PNG")),
            OutputFormat::Png
        );
    }

    #[test]
    fn jpg_extension_becomes_jpeg() {
        assert_eq!(
            OutputFormat::from_source_extension(Path::new("images/banner.jpg")),
            OutputFormat::Jpeg
        );
    }

    #[test]
    fn other_formats_coerce_to_jpeg() {
        // Deliberate normalization: anything that is not PNG is saved as JPEG.
        assert_eq!(
            OutputFormat::from_source_extension(Path::new("images/banner.webp")),
            OutputFormat::Jpeg
        );
        assert_eq!(
            OutputFormat::from_source_extension(Path::new("images/banner")),
            OutputFormat::Jpeg
        );
    }

    #[test]
    fn tile_extensions() {
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
    }
}
