//! SP (mobile) counterpart discovery.
//!
//! A desktop image under a `pc/` tree may have a mobile sibling in the
//! mirrored `sp/` tree. The probe is fail-closed: anything missing means
//! "no pairing", never an error — plenty of desktop images simply have no
//! mobile counterpart.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Locate the SP counterpart of a PC image, if one exists on disk.
///
/// The candidate is the PC path with every `pc` segment replaced by `sp`.
/// When the candidate is missing and the source is a `.jpg`, a `.png`
/// sibling is probed as well — paired exports do not always share an
/// extension.
pub fn find_sp_counterpart(pc_path: &Path) -> Option<PathBuf> {
    let has_pc_segment = pc_path
        .components()
        .any(|c| matches!(c, Component::Normal(seg) if seg == "pc"));
    if !has_pc_segment {
        return None;
    }

    let candidate: PathBuf = pc_path
        .components()
        .map(|c| match c {
            Component::Normal(seg) if seg == "pc" => OsStr::new("sp"),
            other => other.as_os_str(),
        })
        .collect();
    if candidate.is_file() {
        return Some(candidate);
    }

    let is_jpg = pc_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg"));
    if is_jpg {
        let fallback = candidate.with_extension("png");
        if fallback.is_file() {
            return Some(fallback);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create an empty file (and its parents) under the temp root.
    fn touch(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn path_without_pc_segment_fails_closed() {
        let tmp = TempDir::new().unwrap();
        let pc = touch(tmp.path(), "images/top/banner.jpg");
        assert_eq!(find_sp_counterpart(&pc), None);
    }

    #[test]
    fn finds_sp_sibling_with_same_extension() {
        let tmp = TempDir::new().unwrap();
        let pc = touch(tmp.path(), "images/widget/pc/hero/banner.jpg");
        let sp = touch(tmp.path(), "images/widget/sp/hero/banner.jpg");
        assert_eq!(find_sp_counterpart(&pc), Some(sp));
    }

    #[test]
    fn falls_back_from_jpg_to_png() {
        let tmp = TempDir::new().unwrap();
        let pc = touch(tmp.path(), "images/widget/pc/hero/banner.jpg");
        let sp = touch(tmp.path(), "images/widget/sp/hero/banner.png");
        assert_eq!(find_sp_counterpart(&pc), Some(sp));
    }

    #[test]
    fn png_source_does_not_probe_other_extensions() {
        let tmp = TempDir::new().unwrap();
        let pc = touch(tmp.path(), "images/widget/pc/hero/banner.png");
        touch(tmp.path(), "images/widget/sp/hero/banner.jpg");
        assert_eq!(find_sp_counterpart(&pc), None);
    }

    #[test]
    fn missing_counterpart_returns_none() {
        let tmp = TempDir::new().unwrap();
        let pc = touch(tmp.path(), "images/widget/pc/hero/banner.jpg");
        assert_eq!(find_sp_counterpart(&pc), None);
    }
}
