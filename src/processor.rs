//! Directory processing - the core resize/backup workflow

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::codec::ImageCodec;
use crate::dimensions::Dimensions;
use crate::error::{ImagizerError, Result};
use crate::io::LineIo;

/// Name of the backup subfolder for pre-resize originals
pub const BACKUP_DIR_NAME: &str = "original";

/// Accepted file extensions, compared case-sensitively
const ELIGIBLE_EXTENSIONS: [&str; 2] = ["jpg", "png"];

/// Outcome of one batch run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Files successfully resized in place
    pub processed: usize,
    /// Eligible files skipped because decode or encode failed
    pub skipped: usize,
}

/// Resizes every eligible image directly inside one directory
///
/// Enumeration is non-recursive; only entries whose extension is exactly
/// `jpg` or `png` participate. With save-originals enabled, each file is
/// moved into the [`BACKUP_DIR_NAME`] subfolder right before its resized
/// replacement is written.
pub struct DirectoryProcessor<'a, C, L> {
    codec: &'a C,
    io: &'a mut L,
}

impl<'a, C: ImageCodec, L: LineIo> DirectoryProcessor<'a, C, L> {
    pub fn new(codec: &'a C, io: &'a mut L) -> Self {
        Self { codec, io }
    }

    /// Process `directory`, resizing every eligible file to `target`
    ///
    /// A file that fails to decode or re-encode is skipped and counted
    /// separately; it is never moved into the backup subfolder unless it
    /// decoded successfully. Filesystem errors outside a single file's
    /// decode/encode (enumeration, backup preparation, the rename itself)
    /// abort the run.
    pub fn process(
        &mut self,
        directory: &Path,
        target: Dimensions,
        save_originals: bool,
    ) -> Result<BatchOutcome> {
        // Snapshot the entry list before touching the backup subfolder so
        // archived files can never be re-discovered as input mid-run.
        let entries = enumerate_eligible(directory)?;

        let backup_dir = directory.join(BACKUP_DIR_NAME);
        if save_originals {
            prepare_backup_dir(&backup_dir)?;
        }

        let mut outcome = BatchOutcome::default();

        for path in entries {
            let image = match self.codec.decode(&path) {
                Ok(image) => image,
                Err(e) => {
                    warn!("Failed to decode {:?}: {}", path, e);
                    self.skip(&path, &e, &mut outcome)?;
                    continue;
                }
            };

            let (width, height) = self.codec.dimensions(&image);
            debug!("Loaded {:?}: {}x{}", path, width, height);

            if save_originals {
                let file_name = path.file_name().ok_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::InvalidInput, "entry has no file name")
                })?;
                fs::rename(&path, backup_dir.join(file_name))?;
            }

            let resized = self.codec.resize(image, target);
            match self.codec.encode(&resized, &path) {
                Ok(()) => {
                    outcome.processed += 1;
                    self.io
                        .write_line(&format!("Processed {}", path.display()))?;
                }
                Err(e) => {
                    warn!("Failed to encode {:?}: {}", path, e);
                    self.skip(&path, &e, &mut outcome)?;
                }
            }
        }

        self.io.write_line(&summary_line(outcome))?;
        Ok(outcome)
    }

    fn skip(&mut self, path: &Path, error: &ImagizerError, outcome: &mut BatchOutcome) -> Result<()> {
        outcome.skipped += 1;
        self.io.write_line(&format!(
            "Skipping {} ({})",
            path.display(),
            error.user_message()
        ))
    }
}

/// List eligible files directly inside `directory`, in filesystem order
fn enumerate_eligible(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut eligible = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let path = entry.path();
        if has_eligible_extension(&path) {
            eligible.push(path);
        }
    }

    Ok(eligible)
}

/// Case-sensitive check against the two accepted extensions
fn has_eligible_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ELIGIBLE_EXTENSIONS.contains(&ext))
}

/// Create the backup subfolder, or clear a leftover one from a prior run
fn prepare_backup_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        clear_dir(path)?;
    } else {
        fs::create_dir(path)?;
    }
    Ok(())
}

/// Recursively delete everything inside `path`, keeping `path` itself
fn clear_dir(path: &Path) -> Result<()> {
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

fn summary_line(outcome: BatchOutcome) -> String {
    if outcome.skipped > 0 {
        format!(
            "Done! Processed {} image(s), skipped {}. Goodbye.",
            outcome.processed, outcome.skipped
        )
    } else {
        format!("Done! Processed {} image(s). Goodbye.", outcome.processed)
    }
}
