//! Target resolution value type and its interactive parser

use std::fmt;
use std::str::FromStr;

use crate::error::{ImagizerError, Result};

/// An immutable target resolution in pixels
///
/// Both fields are guaranteed to be greater than zero; the only way to
/// construct a value is through the validating constructor or [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Create a new dimensions value, rejecting zero width or height
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ImagizerError::invalid_dimensions(format!(
                "width and height must be greater than 0 (got {}x{})",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    /// Target width in pixels
    pub fn width(self) -> u32 {
        self.width
    }

    /// Target height in pixels
    pub fn height(self) -> u32 {
        self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = ImagizerError;

    /// Parse a free-text prompt answer of the form `"400 200"`
    ///
    /// The line must split into at least two whitespace-separated tokens;
    /// the first two must parse as positive integers. Anything after the
    /// second token is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();

        let width = tokens
            .next()
            .ok_or_else(|| ImagizerError::invalid_dimensions("no input received"))?;
        let height = tokens.next().ok_or_else(|| {
            ImagizerError::invalid_dimensions("expected two values, got one")
        })?;

        let width: u32 = width.parse().map_err(|_| {
            ImagizerError::invalid_dimensions(format!("'{}' is not a positive integer", width))
        })?;
        let height: u32 = height.parse().map_err(|_| {
            ImagizerError::invalid_dimensions(format!("'{}' is not a positive integer", height))
        })?;

        Self::new(width, height)
    }
}
