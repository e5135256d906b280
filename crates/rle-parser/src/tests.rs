use crate::*;
use rle_codec::{Codec, CodecError};
use rle_core::{DocumentKind, Mode, RleError};
use std::path::Path;

// ========== Plain text ==========

#[test]
fn test_text_extract_utf8() {
    assert_eq!(PlainTextSource.extract("héllo 日本".as_bytes()).unwrap(), "héllo 日本");
}

#[test]
fn test_text_extract_drops_invalid_bytes() {
    let bytes = b"ab\xffc\xc3";
    assert_eq!(PlainTextSource.extract(bytes).unwrap(), "abc");
}

#[test]
fn test_text_sink_bytes() {
    assert_eq!(PlainTextSink.render("#3a").unwrap(), b"#3a".to_vec());
    assert_eq!(PlainTextSink.extension(), ".txt");
}

#[test]
fn test_text_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    PlainTextSink.write_file(&path, "line one\nline two").unwrap();
    assert_eq!(PlainTextSource.extract_file(&path).unwrap(), "line one\nline two");
}

#[test]
fn test_can_read() {
    assert!(PlainTextSource.can_read(Path::new("a.txt")));
    assert!(!PlainTextSource.can_read(Path::new("a.docx")));
    assert!(DocxSource.can_read(Path::new("A.DOCX")));
    assert!(PdfSource.can_read(Path::new("paper.pdf")));
}

// ========== DOCX ==========

#[test]
fn test_docx_paragraphs() {
    let xml = r#"<?xml version="1.0"?>
<w:document xmlns:w="x"><w:body>
<w:p><w:r><w:t>First</w:t></w:r><w:r><w:t xml:space="preserve"> para</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b &amp; c</w:t><w:br/><w:t>d</w:t></w:r></w:p>
</w:body></w:document>"#;
    let paras = DocxSource::paragraphs(xml).unwrap();
    assert_eq!(paras, vec!["First para", "", "a\tb & c\nd"]);
}

#[test]
fn test_docx_ignores_text_outside_runs() {
    let xml = "<w:document><w:body><w:p><w:pPr><w:pStyle w:val=\"x\"/></w:pPr>stray<w:r><w:t>kept</w:t></w:r></w:p></w:body></w:document>";
    assert_eq!(DocxSource::paragraphs(xml).unwrap(), vec!["kept"]);
}

#[test]
fn test_docx_document_xml_escapes() {
    let xml = DocxSink::document_xml("a<b>&\tc\nd");
    assert!(xml.contains("a&lt;b&gt;&amp;"));
    assert!(xml.contains("<w:tab/>"));
    assert!(xml.contains("<w:br/>"));
}

#[test]
fn test_docx_render_extract_roundtrip() {
    let text = "#3abb#5c!!\n\tindented <tag> & more\n\nlast line ";
    let bytes = DocxSink.render(text).unwrap();
    assert_eq!(&bytes[..2], b"PK");
    assert_eq!(DocxSource.extract(&bytes).unwrap(), text);
}

#[test]
fn test_docx_render_empty() {
    let bytes = DocxSink.render("").unwrap();
    assert_eq!(DocxSource.extract(&bytes).unwrap(), "");
}

#[test]
fn test_docx_not_a_zip() {
    assert!(matches!(
        DocxSource.extract(b"plain text, not a package"),
        Err(RleError::Extraction { .. })
    ));
}

/// Minimal PDF with one Courier text line per page.
fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let kids: Vec<Object> = pages
        .iter()
        .map(|line| {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            })
            .into()
        })
        .collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

// ========== PDF ==========

#[test]
fn test_pdf_pages_joined_by_newline() {
    let bytes = pdf_with_pages(&["page one", "page two"]);
    assert_eq!(PdfSource.extract(&bytes).unwrap(), "page one\npage two");
}

#[test]
fn test_pdf_encode_to_text() {
    let bytes = pdf_with_pages(&["aaaa----", "ok"]);
    let doc = process_document(&Codec::default(), Mode::Encode, "scan.pdf", &bytes).unwrap();
    assert_eq!(doc.file_name, "scan_compressed.txt");
    assert_eq!(doc.kind, DocumentKind::Text);
    assert_eq!(doc.bytes, b"#4a#4-\nok".to_vec());
}

#[test]
fn test_pdf_unreadable() {
    assert!(matches!(PdfSource.extract(b"not a pdf at all"), Err(RleError::Extraction { .. })));
}

// ========== Source / sink selection ==========

#[test]
fn test_source_for_kinds() {
    assert_eq!(source_for(DocumentKind::Text).kind(), DocumentKind::Text);
    assert_eq!(source_for(DocumentKind::Docx).kind(), DocumentKind::Docx);
    assert_eq!(source_for(DocumentKind::Pdf).kind(), DocumentKind::Pdf);
}

#[test]
fn test_sink_for_pdf_encode_is_text() {
    let sink = sink_for(DocumentKind::Pdf, Mode::Encode).unwrap();
    assert_eq!(sink.kind(), DocumentKind::Text);
}

#[test]
fn test_sink_for_pdf_decode_rejected() {
    assert!(matches!(
        sink_for(DocumentKind::Pdf, Mode::Decode),
        Err(RleError::EncodingMismatch { .. })
    ));
}

#[test]
fn test_output_file_name() {
    assert_eq!(output_file_name("report", Mode::Encode, DocumentKind::Docx), "report_compressed.docx");
    assert_eq!(output_file_name("report", Mode::Decode, DocumentKind::Text), "report_decompressed.txt");
}

// ========== process_document ==========

#[test]
fn test_process_text_encode() {
    let doc = process_document(&Codec::default(), Mode::Encode, "notes.txt", b"aaabbccccc!!").unwrap();
    assert_eq!(doc.file_name, "notes_compressed.txt");
    assert_eq!(doc.bytes, b"#3abb#5c!!".to_vec());
    assert_eq!(doc.report.original_bytes, 12);
    assert_eq!(doc.report.result_bytes, 10);
    assert_eq!(doc.codec.tokens, 2);
}

#[test]
fn test_process_text_decode() {
    let doc = process_document(&Codec::default(), Mode::Decode, "notes_compressed.txt", b"#3abb#5c!!").unwrap();
    assert_eq!(doc.file_name, "notes_compressed_decompressed.txt");
    assert_eq!(doc.bytes, b"aaabbccccc!!".to_vec());
}

#[test]
fn test_process_docx_roundtrip() {
    let codec = Codec::default();
    let original = DocxSink.render("Title\n==========\nbody    text").unwrap();
    let encoded = process_document(&codec, Mode::Encode, "memo.docx", &original).unwrap();
    assert_eq!(encoded.kind, DocumentKind::Docx);
    assert_eq!(encoded.file_name, "memo_compressed.docx");
    assert_eq!(DocxSource.extract(&encoded.bytes).unwrap(), "Title\n#10=\nbody#4 text");

    let decoded = process_document(&codec, Mode::Decode, &encoded.file_name, &encoded.bytes).unwrap();
    assert_eq!(DocxSource.extract(&decoded.bytes).unwrap(), "Title\n==========\nbody    text");
}

#[test]
fn test_process_pdf_decode_rejected_before_reading() {
    // Not a valid PDF: the mismatch must win over extraction.
    let err = process_document(&Codec::default(), Mode::Decode, "scan.pdf", b"junk").unwrap_err();
    assert!(matches!(err, ProcessError::Document(RleError::EncodingMismatch { .. })));
}

#[test]
fn test_process_unsupported_extension() {
    let err = process_document(&Codec::default(), Mode::Encode, "photo.png", b"..").unwrap_err();
    assert!(matches!(err, ProcessError::Document(RleError::UnsupportedFormat(_))));
}

#[test]
fn test_process_malformed_encoded_content() {
    let err = process_document(&Codec::default(), Mode::Decode, "bad.txt", b"abc#5").unwrap_err();
    assert!(matches!(err, ProcessError::Codec(CodecError::MalformedToken { .. })));
}
