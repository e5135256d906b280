//! Token grammar shared by the encoder and decoder.
//!
//! ```text
//! encoded := (literal | token)*
//! token   := MARKER DIGIT+ CHAR
//! ```

use std::fmt::Write;

use crate::error::{CodecError, Result};

/// Shortest run emitted as a token. Runs below it are copied literally.
pub const RUN_THRESHOLD: usize = 3;

/// Character that introduces an escape token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker(char);

impl Marker {
    pub const DEFAULT: Marker = Marker('#');

    /// Digits are rejected: a digit marker would be read back as part of a count.
    pub fn new(c: char) -> Result<Self> {
        if is_count_digit(c) {
            return Err(CodecError::InvalidMarker(c));
        }
        Ok(Self(c))
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<char> for Marker {
    type Error = CodecError;

    fn try_from(c: char) -> Result<Self> {
        Self::new(c)
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.0)
    }
}

/// Count digits are ASCII only; the encoder never emits anything else.
#[inline]
pub fn is_count_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Append `marker count ch`.
pub fn write_token(out: &mut String, marker: Marker, count: usize, ch: char) {
    out.push(marker.0);
    // Writing to a String cannot fail.
    let _ = write!(out, "{count}");
    out.push(ch);
}

/// Append `ch` `count` times.
#[inline]
pub fn push_repeated(out: &mut String, ch: char, count: usize) {
    out.extend(std::iter::repeat(ch).take(count));
}
