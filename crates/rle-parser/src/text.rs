//! Plain UTF-8 text.

use rle_core::{DocumentKind, Result};

use crate::traits::{TextSink, TextSource};

/// Reads UTF-8, dropping invalid byte sequences.
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Text
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut text = String::with_capacity(bytes.len());
        let mut dropped = 0;
        for chunk in bytes.utf8_chunks() {
            text.push_str(chunk.valid());
            dropped += chunk.invalid().len();
        }
        if dropped > 0 {
            tracing::warn!(dropped, "Dropped invalid UTF-8 bytes");
        }
        Ok(text)
    }
}

pub struct PlainTextSink;

impl TextSink for PlainTextSink {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Text
    }

    fn render(&self, text: &str) -> Result<Vec<u8>> {
        Ok(text.as_bytes().to_vec())
    }
}
