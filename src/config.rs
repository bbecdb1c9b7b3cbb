//! Run configuration: command-line flags merged with an optional JSON
//! config file.
//!
//! The config file mirrors the flag surface — all fields are sparse
//! overrides:
//!
//! ```json
//! {
//!   "width": 1500,
//!   "sp_scale": 1.0,
//!   "media": "(max-width: 600px)"
//! }
//! ```
//!
//! File values win over flag values, field by field. After the merge, each
//! axis (PC and SP) must end up with at most one of width/scale — a width
//! from the file combined with a scale from the command line is a
//! [`ConfigError::ResizeConflict`], not a silent precedence.

use crate::imaging::ResizeSpec;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default breakpoint below which the SP tile sources activate.
pub const DEFAULT_MEDIA_QUERY: &str = "(max-width: 750px)";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{axis} width and scale are mutually exclusive")]
    ResizeConflict { axis: &'static str },
    #[error("{axis} {field} must be positive")]
    NonPositive {
        axis: &'static str,
        field: &'static str,
    },
}

/// Contents of a `--config` JSON file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub width: Option<u32>,
    pub scale: Option<f64>,
    pub sp_width: Option<u32>,
    pub sp_scale: Option<f64>,
    pub media: Option<String>,
}

impl FileConfig {
    /// Read and parse a JSON config file. An unreadable or malformed file
    /// is an error — the file was explicitly requested.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Command-line values eligible for merging with a config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub width: Option<u32>,
    pub scale: Option<f64>,
    pub sp_width: Option<u32>,
    pub sp_scale: Option<f64>,
    pub media: Option<String>,
}

/// Fully merged, validated configuration for one split run.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub pc_image_path: PathBuf,
    pub pc_resize: ResizeSpec,
    pub sp_resize: ResizeSpec,
    pub media_query: String,
}

impl SplitConfig {
    /// Merge flag values with config-file values (file wins per field) and
    /// validate the result.
    pub fn merge(
        pc_image_path: PathBuf,
        flags: Overrides,
        file: FileConfig,
    ) -> Result<Self, ConfigError> {
        let pc_resize = resolve_resize("PC", file.width.or(flags.width), file.scale.or(flags.scale))?;
        let sp_resize = resolve_resize(
            "SP",
            file.sp_width.or(flags.sp_width),
            file.sp_scale.or(flags.sp_scale),
        )?;
        let media_query = file
            .media
            .or(flags.media)
            .unwrap_or_else(|| DEFAULT_MEDIA_QUERY.to_string());
        Ok(Self {
            pc_image_path,
            pc_resize,
            sp_resize,
            media_query,
        })
    }
}

/// Collapse one axis's optional width/scale pair into a [`ResizeSpec`].
fn resolve_resize(
    axis: &'static str,
    width: Option<u32>,
    scale: Option<f64>,
) -> Result<ResizeSpec, ConfigError> {
    match (width, scale) {
        (Some(_), Some(_)) => Err(ConfigError::ResizeConflict { axis }),
        (Some(width), None) => {
            if width == 0 {
                return Err(ConfigError::NonPositive {
                    axis,
                    field: "width",
                });
            }
            Ok(ResizeSpec::TargetWidth(width))
        }
        (None, Some(scale)) => {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(ConfigError::NonPositive {
                    axis,
                    field: "scale",
                });
            }
            Ok(ResizeSpec::ScaleFactor(scale))
        }
        (None, None) => Ok(ResizeSpec::default()),
    }
}
