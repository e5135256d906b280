use thiserror::Error;

/// Why an escape token could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The marker is not followed by a decimal digit.
    MissingCount,
    /// The count runs to the end of input with no character to repeat.
    MissingChar,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCount => f.write_str("marker is not followed by a repeat count"),
            Self::MissingChar => f.write_str("repeat count is not followed by a character"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Malformed token at character {position}: {reason}")]
    MalformedToken { position: usize, reason: MalformedReason },
    #[error("Repeat count at character {position} does not fit in {bits} bits: {digits}")]
    CountOverflow { position: usize, digits: String, bits: u32 },
    #[error("Decoded output would exceed {limit} characters (token at character {position})")]
    OutputLimitExceeded { position: usize, limit: usize },
    #[error("Token at character {position} expands to {count} characters, more than can be allocated")]
    OutputTooLarge { position: usize, count: usize },
    #[error("Invalid marker {0:?}: a decimal digit cannot introduce a token")]
    InvalidMarker(char),
}

pub type Result<T> = std::result::Result<T, CodecError>;
