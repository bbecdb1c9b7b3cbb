//! # tilefold
//!
//! Split one large above-the-fold web image into a stack of overlapping
//! horizontal tiles, save them as numbered files next to the source, and
//! emit the markup fragment that puts them back together — with the
//! fragment landing on your clipboard, ready to paste.
//!
//! Tiling a hero image lets the page lazy-load everything below the first
//! tile while the `--h` style hints reserve exact space, so nothing shifts
//! as tiles arrive. Consecutive tiles share 10 rows to hide the seams
//! browsers produce when rounding scaled tile heights.
//!
//! # Architecture: One Linear Pipeline
//!
//! ```text
//! Validate → Load → ComputeGeometry → Split → Persist → GenerateMarkup
//! ```
//!
//! Data flows one way: path → resolved semantics → (optionally) a paired
//! mobile image → geometry decisions → tile list → saved files + markup
//! string. No stage re-enters an earlier one, and any failure aborts the
//! rest of the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Parses the `images/…/pc/…` path convention into [`naming::PathSemantics`] |
//! | [`pairing`] | Probes for the mobile (`sp/`) counterpart of a desktop image |
//! | [`imaging`] | Geometry math, the codec seam, and the `image`-crate codec |
//! | [`markup`] | Renders the tile fragment with Maud |
//! | [`split`] | The pipeline orchestrator |
//! | [`config`] | Flag + JSON-file merging into a validated run config |
//! | [`output`] | Console report formatting and the clipboard/stdout sink |
//!
//! # Design Decisions
//!
//! ## Path Conventions Over Flags
//!
//! Everything the markup needs — wrapper class, responsive pairing,
//! above-the-fold marking, output format — is read from where the source
//! image lives. The conventions are validated up front: a path without an
//! `images` segment is a typed error before any pixel is decoded, not a
//! silently empty result.
//!
//! ## Maud Over Template Engines
//!
//! The fragment is tiny but it ends up pasted into production pages, so it
//! is rendered with [Maud](https://maud.lambda.xyz/): malformed HTML is a
//! compile error and every interpolated attribute is auto-escaped.
//!
//! ## Pure-Rust Imaging
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling,
//! pure-Rust PNG/JPEG codecs). No ImageMagick, no system dependencies —
//! the binary is fully self-contained. The codec sits behind a two-method
//! trait so the whole pipeline also runs against a recording mock in
//! tests.
//!
//! ## PC Drives, SP Follows
//!
//! When a desktop image has a mobile counterpart, the tile *count* always
//! comes from the desktop image's resized height; the mobile image is
//! recut into the same number of tiles against its own height. The two
//! stacks must line up element-for-element in the emitted `<picture>`
//! markup even though their pixel sizes differ.

pub mod config;
pub mod imaging;
pub mod markup;
pub mod naming;
pub mod output;
pub mod pairing;
pub mod split;
