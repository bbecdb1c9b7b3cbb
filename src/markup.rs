//! Tile markup generation.
//!
//! Produces the fragment that replaces the original single `<img>`: one
//! element per tile, stacked top to bottom, optionally wrapped in a
//! class-carrying `<div>`.
//!
//! Each element carries a `--h` custom property holding half the tile's
//! pixel height — stylesheets size tiles in CSS pixels under the 2x export
//! convention, so the browser never reflows as tiles lazy-load.
//!
//! Responsive images (a `pc/` path with an `sp/` sibling) become
//! `<picture>` elements whose `<source>` activates the mobile tile below
//! the breakpoint:
//!
//! ```text
//! <picture style="--h: 100;">
//!   <source srcset="./images/widget/sp/hero/1.jpg" media="(max-width: 750px)">
//!   <img src="./images/widget/pc/hero/1.jpg" alt="">
//! </picture>
//! ```
//!
//! HTML is rendered with [maud](https://maud.lambda.xyz/): templates are
//! compile-time-checked Rust and all interpolation is auto-escaped.

use crate::naming::PathSemantics;
use maud::{PreEscaped, html};

/// Render the markup fragment for a split image.
///
/// `tile_heights` are the persisted PC tile heights in stacking order;
/// the fragment lists tiles in the same order, joined by newlines.
/// `media_query` becomes the `media` attribute of every SP `<source>`.
/// Deterministic for identical inputs.
pub fn render_tiles(semantics: &PathSemantics, tile_heights: &[u32], media_query: &str) -> String {
    let ext = semantics.format.extension();
    let tiles: Vec<String> = tile_heights
        .iter()
        .enumerate()
        .map(|(idx, &height)| {
            let index = idx + 1;
            let style = format!("--h: {};", height as f64 / 2.0);
            if semantics.responsive {
                responsive_tile(semantics, index, ext, &style, media_query)
            } else {
                simple_tile(semantics, index, ext, &style)
            }
        })
        .collect();
    let fragment = tiles.join("\n");

    match &semantics.wrapper_class {
        Some(class) => html! {
            div class=(class) {
                "\n" (PreEscaped(&fragment)) "\n"
            }
        }
        .into_string(),
        None => fragment,
    }
}

/// `<picture>` switching between the `sp/` and `pc/` trees at the breakpoint.
fn responsive_tile(
    semantics: &PathSemantics,
    index: usize,
    ext: &str,
    style: &str,
    media_query: &str,
) -> String {
    let sp_src = tile_src(semantics, &["sp", &semantics.sub_dir], index, ext);
    let pc_src = tile_src(semantics, &["pc", &semantics.sub_dir], index, ext);
    html! {
        picture style=(style) {
            source srcset=(sp_src) media=(media_query);
            img src=(pc_src) alt="";
        }
    }
    .into_string()
}

/// Plain `<img>` for a standalone (non-paired) image.
fn simple_tile(semantics: &PathSemantics, index: usize, ext: &str, style: &str) -> String {
    let src = tile_src(semantics, &[&semantics.sub_dir], index, ext);
    html! {
        img src=(src) style=(style) alt="";
    }
    .into_string()
}

/// Join the relative base, branch segments, and numbered filename into a
/// tile URL, skipping empty segments.
fn tile_src(semantics: &PathSemantics, branches: &[&str], index: usize, ext: &str) -> String {
    let mut src = semantics.relative_base.clone();
    for segment in branches {
        if !segment.is_empty() {
            src.push('/');
            src.push_str(segment);
        }
    }
    src.push_str(&format!("/{index}.{ext}"));
    src
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::OutputFormat;

    fn semantics(
        wrapper_class: Option<&str>,
        responsive: bool,
        relative_base: &str,
        sub_dir: &str,
        format: OutputFormat,
    ) -> PathSemantics {
        PathSemantics {
            wrapper_class: wrapper_class.map(str::to_string),
            first_view: false,
            responsive,
            relative_base: relative_base.to_string(),
            sub_dir: sub_dir.to_string(),
            format,
        }
    }

    #[test]
    fn simple_tiles_in_ascending_order_without_wrapper() {
        let sem = semantics(None, false, "./images", "top", OutputFormat::Jpeg);
        let markup = render_tiles(&sem, &[200, 210, 210, 210, 210], "(max-width: 750px)");

        assert_eq!(markup.matches("<img").count(), 5);
        assert!(!markup.contains("<div"));
        assert!(!markup.contains("<picture"));
        let first = markup.find("./images/top/1.jpg").unwrap();
        let last = markup.find("./images/top/5.jpg").unwrap();
        assert!(first < last);
        assert_eq!(markup.lines().count(), 5);
    }

    #[test]
    fn height_hint_is_half_the_tile_height() {
        let sem = semantics(None, false, "./images", "", OutputFormat::Jpeg);
        let markup = render_tiles(&sem, &[200, 195], "(max-width: 750px)");
        assert!(markup.contains("--h: 100;"));
        assert!(markup.contains("--h: 97.5;"));
    }

    #[test]
    fn empty_sub_dir_is_omitted_from_urls() {
        let sem = semantics(None, false, "./images", "", OutputFormat::Png);
        let markup = render_tiles(&sem, &[300], "(max-width: 750px)");
        assert!(markup.contains(r#"src="./images/1.png""#));
    }

    #[test]
    fn wrapper_class_wraps_the_whole_fragment() {
        let sem = semantics(Some("widget"), false, "./images", "widget", OutputFormat::Jpeg);
        let markup = render_tiles(&sem, &[200, 210], "(max-width: 750px)");
        assert!(markup.starts_with(r#"<div class="widget">"#));
        assert!(markup.ends_with("</div>"));
        assert_eq!(markup.matches("<img").count(), 2);
    }

    #[test]
    fn responsive_tiles_reference_both_trees() {
        let sem = semantics(
            Some("widget"),
            true,
            "./images/widget",
            "hero",
            OutputFormat::Jpeg,
        );
        let markup = render_tiles(&sem, &[200], "(max-width: 750px)");

        assert!(markup.contains("<picture"));
        assert!(markup.contains(r#"srcset="./images/widget/sp/hero/1.jpg""#));
        assert!(markup.contains(r#"media="(max-width: 750px)""#));
        assert!(markup.contains(r#"src="./images/widget/pc/hero/1.jpg""#));
        assert!(markup.contains(r#"alt="""#));
    }

    #[test]
    fn responsive_tile_count_matches_heights() {
        let sem = semantics(None, true, "./images", "hero", OutputFormat::Png);
        let markup = render_tiles(&sem, &[250, 260, 260], "(max-width: 600px)");
        assert_eq!(markup.matches("<picture").count(), 3);
        assert_eq!(markup.matches(r#"media="(max-width: 600px)""#).count(), 3);
    }

    #[test]
    fn interpolated_attributes_are_escaped() {
        let sem = semantics(Some(r#"wid"get"#), false, "./images", "", OutputFormat::Jpeg);
        let markup = render_tiles(&sem, &[200], "(max-width: 750px)");
        assert!(markup.contains("wid&quot;get"));
        assert!(!markup.contains(r#"class="wid"get""#));
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let sem = semantics(Some("fv"), false, "./images", "fv", OutputFormat::Png);
        let a = render_tiles(&sem, &[225, 235], "(max-width: 750px)");
        let b = render_tiles(&sem, &[225, 235], "(max-width: 750px)");
        assert_eq!(a, b);
    }
}
