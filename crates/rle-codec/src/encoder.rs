//! Encoder: collapse runs of `RUN_THRESHOLD` or more identical characters.

use std::iter::Peekable;
use std::str::Chars;

use rle_core::EscapeMode;

use crate::grammar::{is_count_digit, push_repeated, write_token, Marker, RUN_THRESHOLD};

/// Iterator over maximal runs of identical characters as `(char, len)`.
pub struct Runs<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Iterator for Runs<'_> {
    type Item = (char, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        let mut len = 1;
        while self.chars.next_if_eq(&c).is_some() {
            len += 1;
        }
        Some((c, len))
    }
}

/// Split `text` into maximal runs, scanning by Unicode scalar value.
pub fn runs(text: &str) -> Runs<'_> {
    Runs { chars: text.chars().peekable() }
}

/// Encode with literal markers left unescaped.
///
/// Text containing `marker` will not decode back to itself; use
/// [`encode_escaped`] when that matters.
pub fn encode(text: &str, marker: Marker) -> String {
    Encoder::new(marker).encode(text)
}

/// Encode with literal markers doubled and digit runs kept literal, so the
/// result always round-trips through [`crate::decode_escaped`].
pub fn encode_escaped(text: &str, marker: Marker) -> String {
    Encoder::new(marker).with_escape(EscapeMode::Escaped).encode(text)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    pub marker: Marker,
    pub escape: EscapeMode,
}

impl Encoder {
    pub fn new(marker: Marker) -> Self {
        Self { marker, escape: EscapeMode::Compat }
    }

    pub fn with_escape(mut self, escape: EscapeMode) -> Self {
        self.escape = escape;
        self
    }

    pub fn encode(&self, text: &str) -> String {
        self.encode_counting(text).0
    }

    /// Encode and report how many runs were collapsed into tokens.
    pub fn encode_counting(&self, text: &str) -> (String, usize) {
        let mut out = String::with_capacity(text.len());
        let mut tokens = 0;
        let escaped = self.escape == EscapeMode::Escaped;
        for (c, n) in runs(text) {
            // A token repeating a digit reads back as a longer count.
            if n >= RUN_THRESHOLD && !(escaped && is_count_digit(c)) {
                write_token(&mut out, self.marker, n, c);
                tokens += 1;
            } else if escaped && c == self.marker.as_char() {
                push_repeated(&mut out, c, n * 2);
            } else {
                push_repeated(&mut out, c, n);
            }
        }
        (out, tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_basic() {
        let r: Vec<_> = runs("aaabcc").collect();
        assert_eq!(r, vec![('a', 3), ('b', 1), ('c', 2)]);
    }

    #[test]
    fn test_runs_empty() {
        assert_eq!(runs("").count(), 0);
    }

    #[test]
    fn test_runs_multibyte() {
        let r: Vec<_> = runs("ééé日").collect();
        assert_eq!(r, vec![('é', 3), ('日', 1)]);
    }

    #[test]
    fn test_counting() {
        let (out, tokens) = Encoder::default().encode_counting("aaabbccccc!!");
        assert_eq!(out, "#3abb#5c!!");
        assert_eq!(tokens, 2);
    }
}
