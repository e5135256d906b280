use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, RleError};

/// Direction of a codec call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Encode => "encode",
            Self::Decode => "decode",
        }
    }

    /// Suffix appended to the file stem of a produced document.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Self::Encode => "_compressed",
            Self::Decode => "_decompressed",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "encode" | "compress" => Ok(Self::Encode),
            "decode" | "decompress" => Ok(Self::Decode),
            other => Err(format!("Unknown mode: {other}. Available: encode, decode")),
        }
    }
}

/// How literal occurrences of the marker are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    /// Literal markers pass through unescaped. Input containing the
    /// marker does not survive a round trip.
    #[default]
    Compat,
    /// Literal markers are doubled on encode and collapsed on decode.
    Escaped,
}

impl std::str::FromStr for EscapeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compat" => Ok(Self::Compat),
            "escaped" => Ok(Self::Escaped),
            other => Err(format!("Unknown escape mode: {other}. Available: compat, escaped")),
        }
    }
}

/// Supported document formats at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Text,
    Docx,
    Pdf,
}

impl DocumentKind {
    /// Resolve the kind from a file name's extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "txt" => Ok(Self::Text),
            "docx" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            "" => Err(RleError::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
            other => Err(RleError::UnsupportedFormat(format!(".{other}"))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => ".txt",
            Self::Docx => ".docx",
            Self::Pdf => ".pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Self::Pdf => "application/pdf",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Original vs. produced size of a processed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeReport {
    pub original_bytes: usize,
    pub result_bytes: usize,
}

impl SizeReport {
    pub fn new(original_bytes: usize, result_bytes: usize) -> Self {
        Self { original_bytes, result_bytes }
    }

    pub fn original_kb(&self) -> f64 {
        to_kb(self.original_bytes)
    }

    pub fn result_kb(&self) -> f64 {
        to_kb(self.result_bytes)
    }

    pub fn ratio(&self) -> f64 {
        if self.original_bytes == 0 { return 1.0; }
        self.result_bytes as f64 / self.original_bytes as f64
    }
}

/// Kilobytes rounded to two decimals.
pub fn to_kb(bytes: usize) -> f64 {
    (bytes as f64 / 1024.0 * 100.0).round() / 100.0
}
