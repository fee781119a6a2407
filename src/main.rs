use clap::Parser;
use std::path::PathBuf;
use thumb_tidy::{normalize, output};

#[derive(Parser)]
#[command(name = "thumb-tidy")]
#[command(about = "Rename content images to canonical thumbnail names")]
#[command(long_about = "\
Rename content images to canonical thumbnail names

Each subdirectory of the asset root holds the images for one content item.
Images are matched by extension (jpg, jpeg, png, gif, bmp, tiff, webp —
case-insensitive), sorted by name, and renamed in place:

  content-list/
  ├── post-a/
  │   ├── a.jpg        →  thumbnail-0.jpg    # several images: 0-based index
  │   ├── b.png        →  thumbnail-1.png    #   in sorted order
  │   └── notes.txt                          # non-images are left alone
  └── post-b/
      └── cover.WEBP   →  thumbnail.WEBP     # sole image: no index

A directory whose canonical names are already taken fails with a collision
and is left untouched; the remaining directories are still processed, and
the exit status is non-zero if any directory failed. Nothing is ever
overwritten or deleted — the tool renames files, and that is all.")]
#[command(version)]
struct Cli {
    /// Asset root containing one subdirectory per content item
    #[arg(long, default_value = "src/lib/assets/content-list")]
    root: PathBuf,

    /// Write a JSON report of per-directory outcomes to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let report = normalize::normalize(&cli.root)?;
    output::print_run_output(&report);

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)?;
    }

    let failed = report.failed();
    if failed > 0 {
        eprintln!("{} of {} directories failed", failed, report.dirs.len());
        std::process::exit(1);
    }

    Ok(())
}
