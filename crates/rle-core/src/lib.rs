pub mod config;
pub mod error;
pub mod types;

pub use config::{CodecConfig, RleConfig, ServerConfig};
pub use error::{Result, RleError};
pub use types::{DocumentKind, EscapeMode, Mode, SizeReport};
