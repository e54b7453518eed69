//! Imagizer CLI - Interactive Bulk Image Resizer
//!
//! Prompts for a directory, a target resolution, and whether to keep the
//! originals, then resizes every eligible image in place. The only
//! command-line flags control logging verbosity; everything else is
//! interactive.

use std::process;

use clap::Parser;
use console::style;

use imagizer::{init, ConsoleIo, ImageRsCodec, Imagizer};

/// Imagizer - Interactive Bulk Image Resizer
#[derive(Parser)]
#[command(
    name = "imagizer",
    version,
    about = "Interactive bulk image resizer with originals backup",
    long_about = "Imagizer resizes every .jpg and .png file directly inside a directory to one \
                  target resolution. Originals can be preserved in an 'original' backup \
                  subfolder before they are overwritten. The directory, dimensions, and \
                  save-originals choice are all read interactively from stdin."
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity; logs go to stderr so they
    // never interleave with the prompts.
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", log_level);
    }

    if let Err(e) = init() {
        eprintln!(
            "{}: Failed to initialize logging: {}",
            style("Error").red().bold(),
            e
        );
        process::exit(1);
    }

    let mut app = Imagizer::new(ImageRsCodec::new(), ConsoleIo::new());
    if let Err(e) = app.run() {
        eprintln!("{}: {}", style("Error").red().bold(), e.user_message());
        process::exit(1);
    }
}
