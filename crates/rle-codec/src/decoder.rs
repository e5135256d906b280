//! Decoder: single left-to-right pass expanding escape tokens.

use rle_core::EscapeMode;

use crate::error::{CodecError, MalformedReason, Result};
use crate::grammar::{is_count_digit, push_repeated, Marker};

/// Decode `text`, expanding every `marker digits char` token.
///
/// Any such sequence is expanded, including one that was literal text
/// before encoding.
pub fn decode(text: &str, marker: Marker) -> Result<String> {
    Decoder::new(marker).decode(text)
}

/// Decode output of [`crate::encode_escaped`]: `marker marker` is one literal marker.
pub fn decode_escaped(text: &str, marker: Marker) -> Result<String> {
    Decoder::new(marker).with_escape(EscapeMode::Escaped).decode(text)
}

#[derive(Debug, Clone, Copy)]
enum State {
    Copy,
    /// Inside a token. `start` is the marker's char offset, `digits_at`
    /// the byte offset of the first digit.
    Count { start: usize, digits_at: usize, n: usize, digits: usize },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    pub marker: Marker,
    pub escape: EscapeMode,
    pub max_output_chars: Option<usize>,
}

impl Decoder {
    pub fn new(marker: Marker) -> Self {
        Self { marker, escape: EscapeMode::Compat, max_output_chars: None }
    }

    pub fn with_escape(mut self, escape: EscapeMode) -> Self {
        self.escape = escape;
        self
    }

    pub fn with_output_limit(mut self, limit: Option<usize>) -> Self {
        self.max_output_chars = limit;
        self
    }

    pub fn decode(&self, text: &str) -> Result<String> {
        self.decode_counting(text).map(|(out, _)| out)
    }

    /// Decode and report how many tokens were expanded.
    pub fn decode_counting(&self, text: &str) -> Result<(String, usize)> {
        let marker = self.marker.as_char();
        let mut out = String::with_capacity(text.len());
        let mut produced = 0usize;
        let mut tokens = 0usize;
        let mut state = State::Copy;

        for (pos, (byte, c)) in text.char_indices().enumerate() {
            state = match state {
                State::Copy if c == marker => State::Count {
                    start: pos,
                    digits_at: byte + c.len_utf8(),
                    n: 0,
                    digits: 0,
                },
                State::Copy => {
                    self.reserve(&mut produced, 1, pos)?;
                    out.push(c);
                    State::Copy
                }
                State::Count { start, digits_at, n, digits } if is_count_digit(c) => {
                    let d = c as usize - '0' as usize;
                    let n = n.checked_mul(10).and_then(|v| v.checked_add(d)).ok_or_else(|| {
                        CodecError::CountOverflow {
                            position: start,
                            digits: text[digits_at..byte + 1].to_string(),
                            bits: usize::BITS,
                        }
                    })?;
                    State::Count { start, digits_at, n, digits: digits + 1 }
                }
                State::Count { start, digits: 0, .. } => {
                    if c == marker && self.escape == EscapeMode::Escaped {
                        self.reserve(&mut produced, 1, start)?;
                        out.push(marker);
                        State::Copy
                    } else {
                        return Err(CodecError::MalformedToken {
                            position: start,
                            reason: MalformedReason::MissingCount,
                        });
                    }
                }
                State::Count { start, n, .. } => {
                    self.reserve(&mut produced, n, start)?;
                    let bytes = n
                        .checked_mul(c.len_utf8())
                        .ok_or(CodecError::OutputTooLarge { position: start, count: n })?;
                    out.try_reserve(bytes)
                        .map_err(|_| CodecError::OutputTooLarge { position: start, count: n })?;
                    push_repeated(&mut out, c, n);
                    tokens += 1;
                    State::Copy
                }
            };
        }

        match state {
            State::Copy => Ok((out, tokens)),
            State::Count { start, digits: 0, .. } => Err(CodecError::MalformedToken {
                position: start,
                reason: MalformedReason::MissingCount,
            }),
            State::Count { start, .. } => Err(CodecError::MalformedToken {
                position: start,
                reason: MalformedReason::MissingChar,
            }),
        }
    }

    /// Account for `n` more output characters, failing past the limit.
    fn reserve(&self, produced: &mut usize, n: usize, position: usize) -> Result<()> {
        let total = produced.saturating_add(n);
        if let Some(limit) = self.max_output_chars {
            if total > limit {
                return Err(CodecError::OutputLimitExceeded { position, limit });
            }
        }
        *produced = total;
        Ok(())
    }
}
