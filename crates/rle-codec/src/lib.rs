//! Run-length text codec.
//!
//! Runs of three or more identical characters become a `marker, count, char`
//! escape token (`aaaa` -> `#4a`); shorter runs are copied verbatim.
//!
//! Modules:
//! - `grammar`: marker, threshold and token writer shared by both directions
//! - `encoder`: run detection and token emission
//! - `decoder`: single-pass token expansion
//! - `pipeline`: `Codec` facade carrying configuration and statistics

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod grammar;
pub mod pipeline;

pub use decoder::{decode, decode_escaped, Decoder};
pub use encoder::{encode, encode_escaped, runs, Encoder};
pub use error::{CodecError, MalformedReason, Result};
pub use grammar::{Marker, RUN_THRESHOLD};
pub use pipeline::{Codec, CodecResult};
pub use rle_core::{EscapeMode, Mode};
