//! Codec facade: one configured encoder/decoder pair with call statistics.

use rle_core::{CodecConfig, EscapeMode, Mode};
use serde::Serialize;
use tracing::debug;

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::grammar::Marker;

/// Output of one codec call.
#[derive(Debug, Clone, Serialize)]
pub struct CodecResult {
    pub output: String,
    pub mode: Mode,
    /// Input length in bytes.
    pub original_len: usize,
    /// Output length in bytes.
    pub output_len: usize,
    /// Runs collapsed (encode) or tokens expanded (decode).
    pub tokens: usize,
}

impl CodecResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.output_len as f64 / self.original_len as f64
    }

    /// Percentage saved; negative when the output grew.
    pub fn reduction_pct(&self) -> f64 {
        if self.original_len == 0 { return 0.0; }
        (1.0 - self.ratio()) * 100.0
    }
}

/// Encoder and decoder sharing one marker, so a round trip cannot mix markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    encoder: Encoder,
    decoder: Decoder,
}

impl Codec {
    pub fn new(marker: Marker) -> Self {
        Self::with_options(marker, EscapeMode::Compat, None)
    }

    pub fn with_options(marker: Marker, escape: EscapeMode, max_output_chars: Option<usize>) -> Self {
        Self {
            encoder: Encoder::new(marker).with_escape(escape),
            decoder: Decoder::new(marker).with_escape(escape).with_output_limit(max_output_chars),
        }
    }

    pub fn from_config(config: &CodecConfig) -> Result<Self> {
        let marker = Marker::new(config.marker)?;
        Ok(Self::with_options(marker, config.escape, config.max_output_chars))
    }

    pub fn marker(&self) -> Marker {
        self.encoder.marker
    }

    pub fn escape(&self) -> EscapeMode {
        self.encoder.escape
    }

    pub fn encode(&self, text: &str) -> CodecResult {
        let (output, tokens) = self.encoder.encode_counting(text);
        debug!(input_len = text.len(), output_len = output.len(), tokens, "encoded");
        CodecResult {
            original_len: text.len(),
            output_len: output.len(),
            output,
            mode: Mode::Encode,
            tokens,
        }
    }

    pub fn decode(&self, text: &str) -> Result<CodecResult> {
        let (output, tokens) = self.decoder.decode_counting(text).inspect_err(|e| {
            debug!(input_len = text.len(), error = %e, "decode failed");
        })?;
        debug!(input_len = text.len(), output_len = output.len(), tokens, "decoded");
        Ok(CodecResult {
            original_len: text.len(),
            output_len: output.len(),
            output,
            mode: Mode::Decode,
            tokens,
        })
    }

    pub fn run(&self, mode: Mode, text: &str) -> Result<CodecResult> {
        match mode {
            Mode::Encode => Ok(self.encode(text)),
            Mode::Decode => self.decode(text),
        }
    }
}
