//! Whole-document processing: source -> codec -> sink.

use std::path::Path;

use rle_codec::{Codec, CodecError, CodecResult};
use rle_core::{DocumentKind, Mode, RleError, SizeReport};
use thiserror::Error;
use tracing::info;

use crate::{sink_for, source_for};

/// Failure while processing a document. Bad files and bad encoded
/// content are kept apart.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Document(#[from] RleError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub file_name: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
    pub report: SizeReport,
    pub codec: CodecResult,
}

/// `<stem>_compressed<ext>` or `<stem>_decompressed<ext>`.
pub fn output_file_name(stem: &str, mode: Mode, kind: DocumentKind) -> String {
    format!("{stem}{}{}", mode.file_suffix(), kind.extension())
}

/// Run `mode` over the document `file_name` whose contents are `bytes`.
pub fn process_document(
    codec: &Codec,
    mode: Mode,
    file_name: &str,
    bytes: &[u8],
) -> Result<ProcessedDocument, ProcessError> {
    let kind = DocumentKind::from_path(file_name)?;
    // Resolve the sink first so a PDF decode is rejected before any work.
    let sink = sink_for(kind, mode)?;
    let text = source_for(kind).extract(bytes)?;
    let result = codec.run(mode, &text)?;
    let out = sink.render(&result.output)?;

    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let report = SizeReport::new(bytes.len(), out.len());
    info!(
        file = file_name,
        mode = %mode,
        original_kb = report.original_kb(),
        result_kb = report.result_kb(),
        "Processed document"
    );
    Ok(ProcessedDocument {
        file_name: output_file_name(stem, mode, sink.kind()),
        kind: sink.kind(),
        bytes: out,
        report,
        codec: result,
    })
}
