//! Minimal WordprocessingML package writer

use crate::error::Result;
use crate::input::text_extractor::DOCX_DOCUMENT_PART;
use quick_xml::escape::escape;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;

const DOCUMENT_FOOTER: &str = "<w:sectPr/></w:body></w:document>";

/// Builds a .docx with one `w:p` per added paragraph.
/// Newlines inside a paragraph become line breaks.
#[derive(Debug, Default)]
pub struct DocxWriter {
    paragraphs: Vec<String>,
}

impl DocxWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paragraph(mut self, text: &str) -> Self {
        self.paragraphs.push(text.to_string());
        self
    }

    pub fn document_xml(&self) -> String {
        let mut xml = String::from(DOCUMENT_HEADER);

        for paragraph in &self.paragraphs {
            xml.push_str("<w:p><w:r>");
            for (i, line) in paragraph.split('\n').enumerate() {
                if i > 0 {
                    xml.push_str("<w:br/>");
                }
                xml.push_str(r#"<w:t xml:space="preserve">"#);
                xml.push_str(&escape(line));
                xml.push_str("</w:t>");
            }
            xml.push_str("</w:r></w:p>");
        }

        xml.push_str(DOCUMENT_FOOTER);
        xml
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(CONTENT_TYPES.as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        zip.write_all(PACKAGE_RELS.as_bytes())?;

        zip.start_file(DOCX_DOCUMENT_PART, options)?;
        zip.write_all(self.document_xml().as_bytes())?;

        Ok(zip.finish()?.into_inner())
    }
}
