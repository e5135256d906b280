//! WordprocessingML (`.docx`) documents.
//!
//! Only body text is read: each `w:p` paragraph becomes one line, `w:tab`
//! becomes `\t` and `w:br` becomes `\n`. Written documents hold the whole
//! text in a single paragraph, newlines and tabs mapped back the same way.

use std::io::{Cursor, Read, Write};

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use rle_core::{DocumentKind, Result, RleError};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::traits::{TextSink, TextSource};

const DOCUMENT_PART: &str = "word/document.xml";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;

const DOCUMENT_TAIL: &str = "</w:body></w:document>";

fn extraction_error(message: impl ToString) -> RleError {
    RleError::Extraction { kind: "docx".into(), message: message.to_string() }
}

fn render_error(message: impl ToString) -> RleError {
    RleError::Render { kind: "docx".into(), message: message.to_string() }
}

pub struct DocxSource;

impl DocxSource {
    /// Paragraph texts of a `word/document.xml` part.
    pub fn paragraphs(xml: &str) -> Result<Vec<String>> {
        let mut reader = Reader::from_str(xml);
        let mut paragraphs = Vec::new();
        let mut current: Option<String> = None;
        let mut in_text = false;

        loop {
            match reader.read_event().map_err(extraction_error)? {
                Event::Start(e) => match e.name().as_ref() {
                    b"w:p" => current = Some(String::new()),
                    b"w:t" => in_text = true,
                    _ => {}
                },
                Event::End(e) => match e.name().as_ref() {
                    b"w:p" => paragraphs.extend(current.take()),
                    b"w:t" => in_text = false,
                    _ => {}
                },
                Event::Empty(e) => match (e.name().as_ref(), current.as_mut()) {
                    (b"w:p", _) => paragraphs.push(String::new()),
                    (b"w:tab", Some(p)) => p.push('\t'),
                    (b"w:br" | b"w:cr", Some(p)) => p.push('\n'),
                    _ => {}
                },
                Event::Text(t) if in_text => {
                    if let Some(p) = current.as_mut() {
                        p.push_str(&t.unescape().map_err(extraction_error)?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }
        Ok(paragraphs)
    }
}

impl TextSource for DocxSource {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Docx
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(extraction_error)?;
        let mut part = archive.by_name(DOCUMENT_PART).map_err(extraction_error)?;
        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(extraction_error)?;
        let paragraphs = Self::paragraphs(&xml)?;
        tracing::debug!(paragraphs = paragraphs.len(), "Extracted docx text");
        Ok(paragraphs.join("\n"))
    }
}

pub struct DocxSink;

impl DocxSink {
    /// `word/document.xml` holding `text` as one paragraph.
    pub fn document_xml(text: &str) -> String {
        let mut xml = String::with_capacity(DOCUMENT_HEAD.len() + text.len() + 64);
        xml.push_str(DOCUMENT_HEAD);
        xml.push_str("<w:p><w:r>");
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                xml.push_str("<w:br/>");
            }
            for (j, segment) in line.split('\t').enumerate() {
                if j > 0 {
                    xml.push_str("<w:tab/>");
                }
                if !segment.is_empty() {
                    xml.push_str(r#"<w:t xml:space="preserve">"#);
                    xml.push_str(&escape(segment));
                    xml.push_str("</w:t>");
                }
            }
        }
        xml.push_str("</w:r></w:p>");
        xml.push_str(DOCUMENT_TAIL);
        xml
    }
}

impl TextSink for DocxSink {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Docx
    }

    fn render(&self, text: &str) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let parts = [
            ("[Content_Types].xml", CONTENT_TYPES.to_string()),
            ("_rels/.rels", PACKAGE_RELS.to_string()),
            (DOCUMENT_PART, Self::document_xml(text)),
        ];
        for (name, content) in parts {
            zip.start_file(name, SimpleFileOptions::default()).map_err(render_error)?;
            zip.write_all(content.as_bytes()).map_err(render_error)?;
        }
        let cursor = zip.finish().map_err(render_error)?;
        Ok(cursor.into_inner())
    }
}
