//! Text sources and sinks for the documents the codec works on.
//!
//! `.txt` and `.docx` can be read and written; `.pdf` can only be read.

pub mod docx;
pub mod document;
pub mod pdf;
pub mod text;
pub mod traits;

pub use docx::{DocxSink, DocxSource};
pub use document::{output_file_name, process_document, ProcessError, ProcessedDocument};
pub use pdf::PdfSource;
pub use text::{PlainTextSink, PlainTextSource};
pub use traits::{TextSink, TextSource};

use rle_core::{DocumentKind, Mode, Result, RleError};

/// Reader for `kind`.
pub fn source_for(kind: DocumentKind) -> Box<dyn TextSource> {
    match kind {
        DocumentKind::Text => Box::new(PlainTextSource),
        DocumentKind::Docx => Box::new(DocxSource),
        DocumentKind::Pdf => Box::new(PdfSource),
    }
}

/// Writer for the result of running `mode` on a `kind` document.
///
/// Encoded PDFs are written as plain text; decoding a PDF is rejected.
pub fn sink_for(kind: DocumentKind, mode: Mode) -> Result<Box<dyn TextSink>> {
    match (kind, mode) {
        (DocumentKind::Text, _) | (DocumentKind::Pdf, Mode::Encode) => Ok(Box::new(PlainTextSink)),
        (DocumentKind::Docx, _) => Ok(Box::new(DocxSink)),
        (DocumentKind::Pdf, Mode::Decode) => Err(RleError::EncodingMismatch { kind: "PDF".into() }),
    }
}

#[cfg(test)]
mod tests;
