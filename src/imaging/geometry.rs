//! Pure tile-geometry calculations.
//!
//! All functions here are pure and testable without any I/O or images.
//! The orchestrator feeds them decoded dimensions and gets back the full
//! tiling plan: resized dimensions, tile count, and per-tile boundaries.

use super::params::{Normalization, OutputFormat, ResizeSpec};

/// Nominal tile height the splitter aims for, in resized pixel rows.
///
/// Short images get coarser tiles rather than more of them; the count never
/// drops below one.
pub const TILE_TARGET_HEIGHT: u32 = 200;

/// Rows shared between consecutive tiles.
///
/// Browsers round tile heights independently when the viewport scales the
/// image; the shared rows keep those rounding errors from showing as seams.
pub const TILE_OVERLAP: u32 = 10;

/// One horizontal slice of a resized image, in pixel rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBoundary {
    /// First row of the slice.
    pub top: u32,
    /// One past the last row; always greater than `top`.
    pub bottom: u32,
}

impl TileBoundary {
    /// Height of the slice in rows.
    pub fn height(self) -> u32 {
        self.bottom - self.top
    }
}

/// Compute output dimensions for a resize.
///
/// The scale factor is uniform: `TargetWidth` derives it from the current
/// width and applies it to both axes, `ScaleFactor` applies as-is.
/// Fractional results are floored.
///
/// # Examples
/// ```
/// # use tilefold::imaging::{resize_dimensions, ResizeSpec};
/// assert_eq!(
///     resize_dimensions(1500, 1000, ResizeSpec::TargetWidth(750)),
///     (750, 500)
/// );
/// assert_eq!(
///     resize_dimensions(800, 600, ResizeSpec::ScaleFactor(2.0)),
///     (1600, 1200)
/// );
/// ```
pub fn resize_dimensions(width: u32, height: u32, spec: ResizeSpec) -> (u32, u32) {
    let factor = match spec {
        ResizeSpec::TargetWidth(target) => target as f64 / width as f64,
        ResizeSpec::ScaleFactor(factor) => factor,
    };
    (
        (width as f64 * factor) as u32,
        (height as f64 * factor) as u32,
    )
}

/// Number of tiles for a resized image height: one per full
/// [`TILE_TARGET_HEIGHT`] rows, never zero.
pub fn tile_count(resized_height: u32) -> u32 {
    (resized_height / TILE_TARGET_HEIGHT).max(1)
}

/// Compute the tile boundaries for an image of the given resized height.
///
/// `count` must be at least 1 (use [`tile_count`]). The base tile height is
/// `resized_height / count`; every tile after the first starts
/// [`TILE_OVERLAP`] rows above its nominal edge, so consecutive tiles share
/// that many rows. The last tile runs to the true bottom, absorbing the
/// integer-division remainder.
pub fn tile_boundaries(resized_height: u32, count: u32) -> Vec<TileBoundary> {
    let base = resized_height / count;
    (0..count)
        .map(|i| {
            let top = if i == 0 {
                0
            } else {
                (i * base).saturating_sub(TILE_OVERLAP)
            };
            let bottom = if i == count - 1 {
                resized_height
            } else {
                (i + 1) * base
            };
            TileBoundary { top, bottom }
        })
        .collect()
}

/// Decide what must happen to a buffer before encoding.
///
/// Flatten onto white iff the tile is headed for JPEG and the source pixels
/// carry alpha; PNG output and opaque sources pass through unchanged.
pub fn encoding_transform(has_alpha: bool, format: OutputFormat) -> Normalization {
    if format == OutputFormat::Jpeg && has_alpha {
        Normalization::FlattenOntoWhite
    } else {
        Normalization::PassThrough
    }
}
