//! Input manager for handling different file types

use crate::error::{Result, ResumeGenieError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::path::Path;

pub const RESUME_EXTENSIONS: &[&str] = &["docx", "pdf", "txt", "md"];
pub const JOB_DESCRIPTION_EXTENSIONS: &[&str] = &["txt", "md"];

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeGenieError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        info!("Extracting text from {}: {}", file_type, path.display());

        match file_type {
            FileType::Docx => DocxExtractor.extract(path).await,
            FileType::Pdf => PdfExtractor.extract(path).await,
            FileType::Text => PlainTextExtractor.extract(path).await,
            FileType::Markdown => MarkdownExtractor.extract(path).await,
            FileType::Unknown => Err(ResumeGenieError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }

    /// Resume text, lowercased. Empty extractions abort the request.
    pub async fn extract_resume(&self, path: &Path) -> Result<String> {
        let text = self.extract_text(path).await?.to_lowercase();

        if text.trim().is_empty() {
            return Err(ResumeGenieError::EmptyDocument(format!(
                "no text found in {}",
                path.display()
            )));
        }

        Ok(text)
    }

    pub async fn extract_job_description(&self, path: &Path) -> Result<String> {
        match self.detect_file_type(path)? {
            file_type if file_type.is_plain_text() => self.extract_text(path).await,
            _ => Err(ResumeGenieError::UnsupportedFormat(format!(
                "Job descriptions must be {} files: {}",
                JOB_DESCRIPTION_EXTENSIONS.join("/"),
                path.display()
            ))),
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        FileType::from_path(path).ok_or_else(|| {
            ResumeGenieError::InvalidInput(format!("File has no extension: {}", path.display()))
        })
    }
}
