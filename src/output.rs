//! CLI reporting and the markup sink.
//!
//! Format functions are pure — they return `Vec<String>` and perform no
//! I/O — so the report is unit-testable; `print_*` wrappers write to
//! stdout. The markup itself goes to a [`MarkupSink`]: the system
//! clipboard by default (ready to paste into the page under edit), stdout
//! when requested.
//!
//! # Output format
//!
//! ```text
//! PC: banner.png 1500x1000 → 3000x2000
//! SP: banner.png 750x1300 → 1500x2600
//! Tiles: 10 (heights 400, 410, 410, ...)
//! Markup copied to the clipboard
//! ```

use crate::split::{ImageReport, SplitOutcome};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Where the generated markup fragment is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupSink {
    /// Copy to the system clipboard.
    Clipboard,
    /// Print to stdout (headless environments, shell pipelines).
    Stdout,
}

impl MarkupSink {
    /// Hand the fragment to its destination.
    pub fn deliver(self, markup: &str) -> Result<(), SinkError> {
        match self {
            MarkupSink::Clipboard => {
                let mut clipboard = arboard::Clipboard::new()?;
                clipboard.set_text(markup)?;
                Ok(())
            }
            MarkupSink::Stdout => {
                println!("{markup}");
                Ok(())
            }
        }
    }
}

// ============================================================================
// Run reporting
// ============================================================================

/// Format the post-run report: per-image sizes, tile summary, delivery note.
pub fn format_split_output(outcome: &SplitOutcome, sink: MarkupSink) -> Vec<String> {
    let mut lines = vec![image_line("PC", &outcome.pc)];
    if let Some(sp) = &outcome.sp {
        lines.push(image_line("SP", sp));
    }

    let heights: Vec<String> = outcome.tile_heights.iter().map(u32::to_string).collect();
    lines.push(format!(
        "Tiles: {} (heights {})",
        outcome.tile_count,
        heights.join(", ")
    ));

    lines.push(match sink {
        MarkupSink::Clipboard => "Markup copied to the clipboard".to_string(),
        MarkupSink::Stdout => "Markup:".to_string(),
    });
    lines
}

/// Print the post-run report to stdout.
pub fn print_split_output(outcome: &SplitOutcome, sink: MarkupSink) {
    for line in format_split_output(outcome, sink) {
        println!("{line}");
    }
}

/// One image's line: label, filename, original → resized dimensions.
fn image_line(label: &str, report: &ImageReport) -> String {
    let name = report
        .source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.source.display().to_string());
    format!(
        "{}: {} {}x{} → {}x{}",
        label, name, report.original.0, report.original.1, report.resized.0, report.resized.1
    )
}
