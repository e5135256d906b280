use thiserror::Error;

/// Errors raised at the document boundary, outside the codec itself.
#[derive(Error, Debug)]
pub enum RleError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Unreadable {kind} document: {message}")]
    Extraction { kind: String, message: String },
    #[error("Cannot render {kind} document: {message}")]
    Render { kind: String, message: String },
    #[error("{kind} files cannot be decoded; decode the .txt or .docx produced by encoding instead")]
    EncodingMismatch { kind: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        fn read_missing() -> Result<Vec<u8>> {
            Ok(std::fs::read("/nonexistent/rle/input.txt")?)
        }
        assert!(matches!(read_missing(), Err(RleError::Io(_))));
    }

    #[test]
    fn test_mismatch_message_names_kind() {
        let err = RleError::EncodingMismatch { kind: "pdf".into() };
        assert!(err.to_string().starts_with("pdf files cannot be decoded"));
    }
}
