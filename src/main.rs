use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tilefold::config::{self, FileConfig, Overrides, SplitConfig};
use tilefold::imaging::RustCodec;
use tilefold::output::{self, MarkupSink};
use tilefold::split;

#[derive(Parser)]
#[command(name = "tilefold")]
#[command(about = "Split above-the-fold images into lazy-load tiles")]
#[command(long_about = "\
Split above-the-fold images into lazy-load tiles

Takes one large hero image, resizes it (2x by default), slices it into
overlapping horizontal tiles, saves them as numbered files next to the
source, and copies the matching markup fragment to the clipboard.

Path conventions drive the markup:

  images/                      # required root segment
  └── widget/                  # wrapper class for the fragment
      ├── pc/                  # desktop tree → responsive <picture> markup
      │   └── hero/
      │       └── banner.png   # source; tiles land here as 1.png, 2.png, ...
      └── sp/                  # mobile counterpart, found automatically
          └── hero/
              └── banner.png

Without a pc/ segment the image is split standalone and emitted as plain
<img> tiles. A directory named fv marks above-the-fold imagery. PNG
sources keep PNG tiles; everything else becomes JPEG.")]
#[command(version)]
struct Cli {
    /// PC (desktop) source image
    image_path: PathBuf,

    /// Resize the PC image to this width in pixels
    #[arg(long, group = "pc_resize")]
    width: Option<u32>,

    /// Scale factor for the PC image (default: 2.0)
    #[arg(long, group = "pc_resize")]
    scale: Option<f64>,

    /// Resize the SP image to this width in pixels
    #[arg(long, group = "sp_resize")]
    sp_width: Option<u32>,

    /// Scale factor for the SP image (default: 2.0)
    #[arg(long, group = "sp_resize")]
    sp_scale: Option<f64>,

    /// media attribute for the SP <source> elements
    #[arg(long, default_value = config::DEFAULT_MEDIA_QUERY)]
    media: String,

    /// JSON config file; its values override the flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the markup to stdout instead of the clipboard
    #[arg(long)]
    stdout: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let flags = Overrides {
        width: cli.width,
        scale: cli.scale,
        sp_width: cli.sp_width,
        sp_scale: cli.sp_scale,
        media: Some(cli.media),
    };
    let config = SplitConfig::merge(cli.image_path, flags, file)?;
    let sink = if cli.stdout {
        MarkupSink::Stdout
    } else {
        MarkupSink::Clipboard
    };

    let outcome = split::split(&config, &RustCodec::new())?;
    output::print_split_output(&outcome, sink);
    sink.deliver(&outcome.markup)?;
    Ok(())
}
