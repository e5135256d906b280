//! PDF text extraction. Best-effort and read-only: there is no PDF sink.

use lopdf::Document;
use rle_core::{DocumentKind, Result, RleError};

use crate::traits::TextSource;

pub struct PdfSource;

impl TextSource for PdfSource {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    /// Text of every page in order, pages separated by `\n`.
    ///
    /// A page whose text cannot be extracted contributes an empty string.
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let doc = Document::load_mem(bytes).map_err(|e| RleError::Extraction {
            kind: "pdf".into(),
            message: e.to_string(),
        })?;
        let pages: Vec<String> = doc
            .get_pages()
            .into_keys()
            .map(|page| {
                match doc.extract_text(&[page]) {
                    // lopdf ends every text object with a newline.
                    Ok(text) => text.trim_end_matches(['\r', '\n']).to_string(),
                    Err(e) => {
                        tracing::warn!(page, error = %e, "Skipping page without extractable text");
                        String::new()
                    }
                }
            })
            .collect();
        tracing::debug!(pages = pages.len(), "Extracted pdf text");
        Ok(pages.join("\n"))
    }
}
