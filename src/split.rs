//! The split pipeline.
//!
//! One linear run per invocation:
//!
//! ```text
//! Validate → Load → ComputeGeometry → Split → Persist → GenerateMarkup
//! ```
//!
//! The first failing stage aborts the run — there are no retries and no
//! rollback, so tiles written before a late failure stay on disk and the
//! caller must treat the directory as inconsistent.
//!
//! ## Output structure
//!
//! ```text
//! images/widget/pc/hero/
//! ├── banner.png          # source (untouched)
//! ├── 1.png               # tiles, top to bottom
//! ├── 2.png
//! └── ...
//! images/widget/sp/hero/  # mirrored tree when an SP counterpart exists,
//! └── ...                 # created on demand
//! ```
//!
//! The SP image is resized with its own spec but split into the same
//! number of tiles as the PC image, each tile cut against the SP's own
//! resized height — the pair must stack identically even though the
//! dimensions differ.

use crate::config::SplitConfig;
use crate::imaging::{
    CodecError, ImageCodec, OutputFormat, PixelBuffer, TileBoundary, encoding_transform,
    resize_dimensions, tile_boundaries, tile_count,
};
use crate::markup;
use crate::naming::{NamingError, PathSemantics};
use crate::pairing;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("source image not found: {0}")]
    SourceNotFound(PathBuf),
    #[error(transparent)]
    Naming(#[from] NamingError),
    #[error("image codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Original and resized dimensions of one processed source image.
#[derive(Debug, Clone)]
pub struct ImageReport {
    pub source: PathBuf,
    pub original: (u32, u32),
    pub resized: (u32, u32),
}

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub tile_count: u32,
    /// PC tile heights in stacking order; these drive the markup's `--h`
    /// hints.
    pub tile_heights: Vec<u32>,
    /// The generated fragment, ready for the output sink.
    pub markup: String,
    pub pc: ImageReport,
    pub sp: Option<ImageReport>,
}

/// Run the full pipeline for one PC image.
pub fn split(config: &SplitConfig, codec: &impl ImageCodec) -> Result<SplitOutcome, SplitError> {
    let pc_path = config.pc_image_path.as_path();

    // Validate
    if !pc_path.is_file() {
        return Err(SplitError::SourceNotFound(pc_path.to_path_buf()));
    }
    let semantics = PathSemantics::from_path(pc_path)?;

    // Load. Buffers stay owned here until the run ends; dropping them on
    // any exit path is the release.
    let pc_image = codec.decode(pc_path)?;
    let sp_pair = match pairing::find_sp_counterpart(pc_path) {
        Some(path) => Some((codec.decode(&path)?, path)),
        None => None,
    };

    // ComputeGeometry. The tile count always comes from the PC image.
    let (pc_width, pc_height) =
        resize_dimensions(pc_image.width(), pc_image.height(), config.pc_resize);
    let count = tile_count(pc_height);
    let pc_bounds = tile_boundaries(pc_height, count);
    let pc_report = ImageReport {
        source: pc_path.to_path_buf(),
        original: (pc_image.width(), pc_image.height()),
        resized: (pc_width, pc_height),
    };

    // Split + Persist, PC first.
    let pc_resized = pc_image.resize(pc_width, pc_height);
    let tile_heights = persist_tiles(
        codec,
        &pc_resized,
        &pc_bounds,
        &tile_dir(pc_path),
        semantics.format,
    )?;

    let sp_report = match sp_pair {
        Some((sp_image, sp_path)) => {
            let (sp_width, sp_height) =
                resize_dimensions(sp_image.width(), sp_image.height(), config.sp_resize);
            let sp_bounds = tile_boundaries(sp_height, count);
            let sp_dir = tile_dir(&sp_path);
            std::fs::create_dir_all(&sp_dir)?;
            let sp_resized = sp_image.resize(sp_width, sp_height);
            persist_tiles(codec, &sp_resized, &sp_bounds, &sp_dir, semantics.format)?;
            Some(ImageReport {
                source: sp_path,
                original: (sp_image.width(), sp_image.height()),
                resized: (sp_width, sp_height),
            })
        }
        None => None,
    };

    // GenerateMarkup
    let markup = markup::render_tiles(&semantics, &tile_heights, &config.media_query);

    Ok(SplitOutcome {
        tile_count: count,
        tile_heights,
        markup,
        pc: pc_report,
        sp: sp_report,
    })
}

/// Crop, normalize, and encode every tile of a resized image; returns the
/// tile heights in stacking order.
fn persist_tiles(
    codec: &impl ImageCodec,
    resized: &PixelBuffer,
    bounds: &[TileBoundary],
    dir: &Path,
    format: OutputFormat,
) -> Result<Vec<u32>, SplitError> {
    let mut heights = Vec::with_capacity(bounds.len());
    for (idx, &boundary) in bounds.iter().enumerate() {
        let tile = resized.crop_rows(boundary);
        heights.push(tile.height());
        let transform = encoding_transform(tile.has_alpha(), format);
        let tile = tile.normalize(transform);
        let output = dir.join(format!("{}.{}", idx + 1, format.extension()));
        codec.encode(&tile, &output, format)?;
    }
    Ok(heights)
}

/// Directory a source image's tiles land in: its own directory.
fn tile_dir(source: &Path) -> PathBuf {
    source
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
