//! Image processing — pure Rust, statically linked.
//!
//! | Concern | Module |
//! |---|---|
//! | Resize/tile/normalization math | [`geometry`] (pure functions) |
//! | Parameter & decision types | [`params`] |
//! | Codec seam | [`codec`] — [`ImageCodec`] trait + [`PixelBuffer`] |
//! | Production codec | [`rust_codec`] (`image` crate, Lanczos3) |
//!
//! The split keeps all geometry unit-testable without touching pixels, and
//! all pipeline logic testable against a recording mock instead of a real
//! encoder.

pub mod codec;
pub mod geometry;
pub mod params;
pub mod rust_codec;

pub use codec::{CodecError, ImageCodec, PixelBuffer};
pub use geometry::{
    TILE_OVERLAP, TILE_TARGET_HEIGHT, TileBoundary, encoding_transform, resize_dimensions,
    tile_boundaries, tile_count,
};
pub use params::{Normalization, OutputFormat, ResizeSpec};
pub use rust_codec::RustCodec;
