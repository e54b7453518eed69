//! Line-based console abstraction
//!
//! The core never touches a terminal directly; it prompts and reports
//! through [`LineIo`], so the whole interactive flow is testable with a
//! scripted in-memory implementation.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::error::Result;

/// Blocking, line-oriented read/write boundary
pub trait LineIo {
    /// Read one line, without its trailing newline
    ///
    /// Returns `Ok(None)` when the input stream has ended.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Write one line of output
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Real terminal implementation backed by stdin/stdout
#[derive(Debug, Default)]
pub struct ConsoleIo;

impl ConsoleIo {
    pub fn new() -> Self {
        Self
    }
}

impl LineIo for ConsoleIo {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let bytes_read = io::stdin().read_line(&mut buf)?;
        if bytes_read == 0 {
            return Ok(None);
        }

        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }

        Ok(Some(buf))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Scripted in-memory implementation for tests
///
/// Reads come from a fixed queue of lines; writes are recorded so
/// assertions can inspect everything the core printed.
#[derive(Debug, Default)]
pub struct ScriptedIo {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedIo {
    /// Create a scripted adapter that will answer prompts with `lines`
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything written so far, in order
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// True if any written line contains `needle`
    pub fn output_contains(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl LineIo for ScriptedIo {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_reads_in_order() {
        let mut io = ScriptedIo::new(["first", "second"]);
        assert_eq!(io.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(io.read_line().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_scripted_signals_end_of_input() {
        let mut io = ScriptedIo::new(Vec::<String>::new());
        assert_eq!(io.read_line().unwrap(), None);
        // Stays exhausted on repeated reads
        assert_eq!(io.read_line().unwrap(), None);
    }

    #[test]
    fn test_scripted_records_output() {
        let mut io = ScriptedIo::new(["ignored"]);
        io.write_line("hello").unwrap();
        io.write_line("world").unwrap();
        assert_eq!(io.output(), ["hello", "world"]);
        assert!(io.output_contains("wor"));
        assert!(!io.output_contains("missing"));
    }
}
