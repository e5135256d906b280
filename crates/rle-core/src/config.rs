use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, RleError};
use crate::types::EscapeMode;

/// Environment variable naming a TOML configuration file.
pub const CONFIG_ENV: &str = "RLE_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RleConfig {
    pub codec: CodecConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub marker: char,
    pub escape: EscapeMode,
    /// Upper bound on decoded characters; `None` disables the check.
    pub max_output_chars: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            marker: '#',
            escape: EscapeMode::Compat,
            max_output_chars: Some(64 * 1024 * 1024),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            max_body_bytes: 16 * 1024 * 1024,
        }
    }
}

impl RleConfig {
    /// Parse a TOML configuration file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RleError::InvalidConfig(e.to_string()))
    }

    /// Defaults, then the file named by `RLE_CONFIG`, then `RLE_*` overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                tracing::info!(path = %Path::new(&path).display(), "Loading configuration file");
                Self::from_file(Path::new(&path))?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `RLE_MARKER`, `RLE_ESCAPE`, `RLE_HOST` and `RLE_PORT` from `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(marker) = lookup("RLE_MARKER") {
            let mut chars = marker.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => self.codec.marker = c,
                _ => {
                    return Err(RleError::InvalidConfig(format!(
                        "RLE_MARKER must be exactly one character, got {marker:?}"
                    )))
                }
            }
        }
        if let Some(escape) = lookup("RLE_ESCAPE") {
            self.codec.escape = escape.parse().map_err(RleError::InvalidConfig)?;
        }
        if let Some(host) = lookup("RLE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("RLE_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| RleError::InvalidConfig(format!("RLE_PORT is not a port: {port}")))?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
