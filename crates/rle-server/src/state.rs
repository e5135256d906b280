//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use rle_codec::{Codec, CodecError};
use rle_core::RleConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub codec: Codec,
    pub config: Arc<RleConfig>,
    pub start_time: Instant,
}

impl AppState {
    /// State for the default configuration, whose marker is always valid.
    pub fn new() -> Self {
        let config = RleConfig::default();
        Self {
            codec: Codec::from_config(&config.codec).unwrap_or_default(),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Fails when the configured marker cannot introduce a token.
    pub fn from_config(config: RleConfig) -> Result<Self, CodecError> {
        Ok(Self {
            codec: Codec::from_config(&config.codec)?,
            config: Arc::new(config),
            start_time: Instant::now(),
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
