//! Text extraction from various file formats

use crate::error::{Result, ResumeGenieError};
use pulldown_cmark::{html, Parser};
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;
use zip::ZipArchive;

/// Main document part inside a .docx package
pub const DOCX_DOCUMENT_PART: &str = "word/document.xml";

pub const WORDPROCESSING_NAMESPACE: &[u8] = b"http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let paragraphs = docx_paragraphs(&bytes).map_err(|e| {
            ResumeGenieError::DocumentExtraction(format!("Failed to read document '{}': {}", path.display(), e))
        })?;

        Ok(paragraphs.join(" "))
    }
}

/// Text of each body-level paragraph of a .docx package, in document order.
///
/// Paragraphs nested in tables, text boxes and other containers are skipped.
pub fn docx_paragraphs(bytes: &[u8]) -> Result<Vec<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCX_DOCUMENT_PART)?.read_to_string(&mut xml)?;

    document_xml_paragraphs(&xml)
}

fn document_xml_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = NsReader::from_str(xml);
    // local names of WordprocessingML elements; `None` for anything else
    let mut stack: Vec<Option<Vec<u8>>> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut nested_paragraphs = 0usize;
    let mut in_text = false;

    loop {
        let (namespace, event) = reader.read_resolved_event()?;
        match event {
            Event::Start(e) => {
                let name = wordprocessing_name(namespace, e.local_name().as_ref());
                match name.as_deref() {
                    Some(b"p") if is_body_level(&stack) => current = Some(String::new()),
                    Some(b"p") if current.is_some() => nested_paragraphs += 1,
                    Some(b"t") => in_text = true,
                    _ => {}
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                let name = wordprocessing_name(namespace, e.local_name().as_ref());
                match name.as_deref() {
                    Some(b"p") if is_body_level(&stack) => paragraphs.push(String::new()),
                    // tab stops in w:pPr/w:tabs are also w:tab; only run content counts
                    Some(tag) if nested_paragraphs == 0 && is_run_content(&stack) => {
                        if let Some(text) = current.as_mut() {
                            match tag {
                                b"tab" => text.push('\t'),
                                b"br" | b"cr" => text.push('\n'),
                                _ => {}
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(t) => {
                if in_text && nested_paragraphs == 0 {
                    if let Some(text) = current.as_mut() {
                        text.push_str(&t.unescape()?);
                    }
                }
            }
            Event::End(_) => {
                let name = stack.pop().flatten();
                match name.as_deref() {
                    Some(b"t") => in_text = false,
                    Some(b"p") if is_body_level(&stack) => {
                        if let Some(text) = current.take() {
                            paragraphs.push(text);
                        }
                    }
                    Some(b"p") if nested_paragraphs > 0 => nested_paragraphs -= 1,
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn wordprocessing_name(namespace: ResolveResult<'_>, local_name: &[u8]) -> Option<Vec<u8>> {
    match namespace {
        ResolveResult::Bound(Namespace(uri)) if uri == WORDPROCESSING_NAMESPACE => Some(local_name.to_vec()),
        _ => None,
    }
}

fn is_body_level(stack: &[Option<Vec<u8>>]) -> bool {
    matches!(stack.last(), Some(Some(parent)) if parent.as_slice() == b"body")
}

fn is_run_content(stack: &[Option<Vec<u8>>]) -> bool {
    matches!(stack.last(), Some(Some(parent)) if parent.as_slice() == b"r")
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeGenieError::DocumentExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Render markdown to HTML and strip the tags, one non-empty line per block
pub fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let text = html_output
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    let re = regex::Regex::new(r"<[^>]*>").expect("Invalid tag regex");
    let clean_text = re.replace_all(&text, "");

    clean_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
