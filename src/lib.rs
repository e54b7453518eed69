//! Imagizer - Interactive Bulk Image Resizer
//!
//! A small, single-threaded tool that resizes every `.jpg` and `.png`
//! file directly inside a directory to one target resolution, optionally
//! relocating the pre-resize originals into an `original` backup
//! subfolder first.
//!
//! All functional input is interactive: the tool prompts for the
//! directory, the target dimensions, and whether to keep originals. The
//! prompts go through the [`io::LineIo`] abstraction and the pixel work
//! through the [`codec::ImageCodec`] boundary, so the whole workflow is
//! testable without a terminal or real image bytes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use imagizer::{ConsoleIo, ImageRsCodec, Imagizer};
//!
//! let mut app = Imagizer::new(ImageRsCodec::new(), ConsoleIo::new());
//! let outcome = app.run()?;
//! println!("Resized {} image(s)", outcome.processed);
//! # Ok::<(), imagizer::ImagizerError>(())
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod codec;
pub mod dimensions;
pub mod error;
pub mod io;
pub mod processor;

// Re-export commonly used types
pub use app::Imagizer;
pub use codec::{ImageCodec, ImageRsCodec};
pub use dimensions::Dimensions;
pub use error::{ImagizerError, Result};
pub use io::{ConsoleIo, LineIo, ScriptedIo};
pub use processor::{BatchOutcome, DirectoryProcessor, BACKUP_DIR_NAME};

use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging for the library
///
/// Sets up a tracing subscriber writing to stderr, filtered by the
/// standard `RUST_LOG` environment variable, so log lines never mix
/// with the interactive prompts on stdout. Safe to call more than once.
pub fn init() -> Result<()> {
    if tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish(),
    )
    .is_ok()
    {
        info!("Imagizer v{} initialized", VERSION);
    }

    Ok(())
}
