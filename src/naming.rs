//! Path-convention parsing for the `images/` directory layout.
//!
//! The splitter derives all markup semantics from where the source image
//! lives, not from flags:
//!
//! ```text
//! site/images/widget/pc/hero/banner.png
//!      │      │      │  │
//!      │      │      │  └ sub_dir — carried into every tile URL
//!      │      │      └ responsive marker: an sp/ sibling tree is expected
//!      │      └ wrapper class for the emitted fragment
//!      └ required root segment; paths without it are rejected
//! ```
//!
//! ## Rules
//!
//! - `images` must appear as a directory segment. It anchors the relative
//!   base every tile URL starts from (`./images/...`); a path without it is
//!   a [`NamingError`], not a silently degraded result.
//! - A `pc` segment marks the image as the desktop half of a desktop/mobile
//!   pair; the markup then references both the `pc/` and `sp/` branches.
//! - The wrapper class is the directory segment right after `images`, or
//!   the one after `pc` when `pc` comes first. Only directories count — the
//!   filename never becomes a wrapper class.
//! - A directory named `fv` or `FV` (exact match) marks above-the-fold
//!   imagery.
//! - PNG sources keep PNG tiles; every other extension is coerced to JPEG.

use crate::imaging::OutputFormat;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NamingError {
    #[error("no `images` directory segment in path: {0}")]
    NoImagesRoot(PathBuf),
}

/// Markup and filesystem semantics derived from a PC image path.
///
/// Computed once per run, before any pixel is decoded, and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSemantics {
    /// Class for the `<div>` wrapping the fragment, when the layout
    /// provides one.
    pub wrapper_class: Option<String>,
    /// True when some directory segment equals `fv` or `FV`.
    pub first_view: bool,
    /// True when the path contains a `pc` segment — tiles become
    /// `<picture>` elements switching between the `pc/` and `sp/` trees.
    pub responsive: bool,
    /// URL prefix every tile reference starts from, rooted at `images`.
    /// For responsive images this includes the segments between `images`
    /// and `pc` (e.g. `./images/widget`).
    pub relative_base: String,
    /// Directory segments between `pc` (or `images`) and the filename,
    /// joined with `/`. Empty for images sitting directly in the base.
    pub sub_dir: String,
    /// Tile encoding derived from the source extension.
    pub format: OutputFormat,
}

impl PathSemantics {
    /// Parse a PC image path into its markup semantics.
    pub fn from_path(path: &Path) -> Result<Self, NamingError> {
        let dirs: Vec<&str> = match path.parent() {
            Some(parent) => parent
                .components()
                .filter_map(|c| match c {
                    Component::Normal(seg) => seg.to_str(),
                    _ => None,
                })
                .collect(),
            None => Vec::new(),
        };

        let images_idx = dirs
            .iter()
            .position(|&seg| seg == "images")
            .ok_or_else(|| NamingError::NoImagesRoot(path.to_path_buf()))?;
        let pc_idx = dirs
            .iter()
            .position(|&seg| seg == "pc")
            .filter(|&idx| idx > images_idx);

        let relative_base = match pc_idx {
            Some(pc) => format!("./{}", dirs[images_idx..pc].join("/")),
            None => "./images".to_string(),
        };
        let sub_dir = match pc_idx {
            Some(pc) => dirs[pc + 1..].join("/"),
            None => dirs[images_idx + 1..].join("/"),
        };
        let wrapper_class = match dirs.get(images_idx + 1) {
            Some(&"pc") => dirs.get(images_idx + 2).map(|&seg| seg.to_string()),
            Some(&seg) => Some(seg.to_string()),
            None => None,
        };

        Ok(Self {
            wrapper_class,
            first_view: dirs.iter().any(|&seg| seg == "fv" || seg == "FV"),
            responsive: pc_idx.is_some(),
            relative_base,
            sub_dir,
            format: OutputFormat::from_source_extension(path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responsive_path_with_class_segment() {
        let sem =
            PathSemantics::from_path(Path::new("/var/www/site/images/widget/pc/hero/banner.png"))
                .unwrap();
        assert_eq!(sem.wrapper_class.as_deref(), Some("widget"));
        assert!(sem.responsive);
        assert!(!sem.first_view);
        assert_eq!(sem.relative_base, "./images/widget");
        assert_eq!(sem.sub_dir, "hero");
        assert_eq!(sem.format, OutputFormat::Png);
    }

    #[test]
    fn pc_directly_under_images_takes_class_from_after_pc() {
        let sem = PathSemantics::from_path(Path::new("site/images/pc/hero/banner.jpg")).unwrap();
        assert_eq!(sem.wrapper_class.as_deref(), Some("hero"));
        assert!(sem.responsive);
        assert_eq!(sem.relative_base, "./images");
        assert_eq!(sem.sub_dir, "hero");
        assert_eq!(sem.format, OutputFormat::Jpeg);
    }

    #[test]
    fn non_responsive_path() {
        let sem = PathSemantics::from_path(Path::new("site/images/fv/top/banner.jpg")).unwrap();
        assert_eq!(sem.wrapper_class.as_deref(), Some("fv"));
        assert!(sem.first_view);
        assert!(!sem.responsive);
        assert_eq!(sem.relative_base, "./images");
        assert_eq!(sem.sub_dir, "fv/top");
    }

    #[test]
    fn image_directly_under_images_has_no_class_or_sub_dir() {
        let sem = PathSemantics::from_path(Path::new("images/banner.png")).unwrap();
        assert_eq!(sem.wrapper_class, None);
        assert_eq!(sem.relative_base, "./images");
        assert_eq!(sem.sub_dir, "");
        assert!(!sem.responsive);
    }

    #[test]
    fn filename_never_becomes_a_wrapper_class() {
        // No directory follows pc, so there is no class — the filename
        // does not qualify.
        let sem = PathSemantics::from_path(Path::new("images/pc/banner.jpg")).unwrap();
        assert_eq!(sem.wrapper_class, None);
        assert!(sem.responsive);
        assert_eq!(sem.sub_dir, "");
    }

    #[test]
    fn missing_images_segment_is_rejected() {
        let err = PathSemantics::from_path(Path::new("site/assets/banner.png")).unwrap_err();
        assert!(matches!(err, NamingError::NoImagesRoot(_)));
    }

    #[test]
    fn first_view_match_is_case_sensitive() {
        assert!(
            PathSemantics::from_path(Path::new("images/FV/banner.jpg"))
                .unwrap()
                .first_view
        );
        assert!(
            !PathSemantics::from_path(Path::new("images/Fv/banner.jpg"))
                .unwrap()
                .first_view
        );
        // fv must be a whole segment, not a substring
        assert!(
            !PathSemantics::from_path(Path::new("images/favorites/banner.jpg"))
                .unwrap()
                .first_view
        );
    }

    #[test]
    fn uppercase_png_extension_still_maps_to_png() {
        let sem = PathSemantics::from_path(Path::new("images/top/BANNER.PNG")).unwrap();
        assert_eq!(sem.format, OutputFormat::Png);
    }

    #[test]
    fn pc_before_images_does_not_mark_responsive() {
        let sem = PathSemantics::from_path(Path::new("pc/images/top/banner.jpg")).unwrap();
        assert!(!sem.responsive);
        assert_eq!(sem.wrapper_class.as_deref(), Some("top"));
    }
}
