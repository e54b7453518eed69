//! Interactive orchestration: prompt, validate, process

use std::path::PathBuf;

use tracing::{debug, info};

use crate::codec::ImageCodec;
use crate::dimensions::Dimensions;
use crate::error::{ImagizerError, Result};
use crate::io::LineIo;
use crate::processor::{BatchOutcome, DirectoryProcessor};

/// One interactive bulk-resize session
///
/// Sequences the three prompts (directory, dimensions, save-originals)
/// and runs the directory processor exactly once. The directory and
/// dimension prompts re-ask indefinitely on invalid input; end of input
/// mid-prompt is an error rather than a hang.
pub struct Imagizer<C, L> {
    codec: C,
    io: L,
}

impl<C: ImageCodec, L: LineIo> Imagizer<C, L> {
    pub fn new(codec: C, io: L) -> Self {
        Self { codec, io }
    }

    /// Run one full session
    pub fn run(&mut self) -> Result<BatchOutcome> {
        let directory = self.prompt_directory()?;
        let dimensions = self.prompt_dimensions()?;
        let save_originals = self.prompt_save_originals()?;

        info!(
            "Processing {:?} to {} (save originals: {})",
            directory, dimensions, save_originals
        );

        DirectoryProcessor::new(&self.codec, &mut self.io).process(
            &directory,
            dimensions,
            save_originals,
        )
    }

    /// Re-prompt until the answer names an existing directory
    pub fn prompt_directory(&mut self) -> Result<PathBuf> {
        self.io.write_line("Please specify a directory:")?;

        loop {
            let line = self
                .io
                .read_line()?
                .ok_or_else(|| ImagizerError::input_closed("a directory"))?;

            let path = PathBuf::from(line);
            if path.is_dir() {
                return Ok(path);
            }

            self.io
                .write_line("Directory not found. Please enter a valid directory:")?;
        }
    }

    /// Re-prompt until the answer parses as two positive integers
    pub fn prompt_dimensions(&mut self) -> Result<Dimensions> {
        loop {
            self.io
                .write_line("Please enter desired dimensions ex \"400 200\":")?;

            let line = self
                .io
                .read_line()?
                .ok_or_else(|| ImagizerError::input_closed("dimensions"))?;

            match line.parse::<Dimensions>() {
                Ok(dimensions) => return Ok(dimensions),
                Err(e) => {
                    debug!("Rejected dimension input {:?}: {}", line, e);
                    self.io.write_line(
                        "Error: wrong format. Please enter width and height in pixels separated by a space.",
                    )?;
                }
            }
        }
    }

    /// Ask once whether to keep originals
    ///
    /// Only the literal answer `n` declines; every other line, including
    /// an empty one, keeps the originals. The asymmetry is a deliberate
    /// bias toward preserving data.
    pub fn prompt_save_originals(&mut self) -> Result<bool> {
        self.io.write_line("Save originals? (y/n):")?;

        let line = self
            .io
            .read_line()?
            .ok_or_else(|| ImagizerError::input_closed("the save-originals answer"))?;

        Ok(line != "n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::fake::FakeCodec;
    use crate::io::ScriptedIo;
    use crate::processor::BACKUP_DIR_NAME;
    use std::fs;
    use tempfile::tempdir;

    fn app(lines: &[&str]) -> Imagizer<FakeCodec, ScriptedIo> {
        Imagizer::new(FakeCodec, ScriptedIo::new(lines.iter().copied()))
    }

    #[test]
    fn test_full_session() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), "640 480").unwrap();
        fs::write(dir.path().join("b.png"), "800 600").unwrap();

        let dir_line = dir.path().to_str().unwrap().to_string();
        let mut app = app(&[&dir_line, "400 200", "y"]);

        let outcome = app.run().unwrap();
        assert_eq!(outcome.processed, 2);
        assert!(dir.path().join(BACKUP_DIR_NAME).join("a.jpg").exists());
        assert_eq!(fs::read_to_string(dir.path().join("a.jpg")).unwrap(), "400 200");
    }

    #[test]
    fn test_directory_prompt_retries_until_valid() {
        let dir = tempdir().unwrap();
        let dir_line = dir.path().to_str().unwrap().to_string();

        let mut app = app(&["/definitely/not/a/dir", "", &dir_line]);
        let resolved = app.prompt_directory().unwrap();
        assert_eq!(resolved, dir.path());

        let errors = app
            .io
            .output()
            .iter()
            .filter(|line| line.starts_with("Directory not found"))
            .count();
        assert_eq!(errors, 2);
    }

    #[test]
    fn test_directory_prompt_fails_on_end_of_input() {
        let mut app = app(&["/definitely/not/a/dir"]);
        let result = app.prompt_directory();
        assert!(matches!(result, Err(ImagizerError::InputClosed { .. })));
    }

    #[test]
    fn test_dimension_prompt_retries_until_valid() {
        let mut app = app(&["", "400", "abc def", "0 200", "400 200"]);
        let dimensions = app.prompt_dimensions().unwrap();
        assert_eq!(dimensions, Dimensions::new(400, 200).unwrap());

        let errors = app
            .io
            .output()
            .iter()
            .filter(|line| line.starts_with("Error: wrong format"))
            .count();
        assert_eq!(errors, 4);
    }

    #[test]
    fn test_dimension_prompt_fails_on_end_of_input() {
        let mut app = app(&["not numbers"]);
        let result = app.prompt_dimensions();
        assert!(matches!(result, Err(ImagizerError::InputClosed { .. })));
    }

    #[test]
    fn test_save_originals_only_literal_n_declines() {
        for (answer, expected) in [
            ("n", false),
            ("", true),
            ("y", true),
            ("Yes", true),
            ("no", true),
            ("N", true),
            (" n", true),
        ] {
            let mut app = app(&[answer]);
            assert_eq!(
                app.prompt_save_originals().unwrap(),
                expected,
                "answer {:?}",
                answer
            );
        }
    }

    #[test]
    fn test_save_originals_fails_on_end_of_input() {
        let mut app = app(&[]);
        let result = app.prompt_save_originals();
        assert!(matches!(result, Err(ImagizerError::InputClosed { .. })));
    }
}
