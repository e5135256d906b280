use std::path::Path;

use rle_core::{DocumentKind, Result};

/// Produces the plain text of a document.
pub trait TextSource: Send + Sync {
    fn kind(&self) -> DocumentKind;

    /// Extract text from the raw file contents.
    fn extract(&self, bytes: &[u8]) -> Result<String>;

    fn extract_file(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        self.extract(&bytes)
    }

    /// Check if a file name has this source's extension.
    fn can_read(&self, path: &Path) -> bool {
        DocumentKind::from_path(path).is_ok_and(|k| k == self.kind())
    }
}

/// Serializes text back into a document format.
pub trait TextSink: Send + Sync {
    fn kind(&self) -> DocumentKind;

    fn render(&self, text: &str) -> Result<Vec<u8>>;

    fn write_file(&self, path: &Path, text: &str) -> Result<()> {
        let bytes = self.render(text)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn extension(&self) -> &'static str {
        self.kind().extension()
    }
}
