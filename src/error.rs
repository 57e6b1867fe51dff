//! Error handling for the resume genie application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeGenieError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document extraction error: {0}")]
    DocumentExtraction(String),

    #[error("Failed to extract resume content: {0}")]
    EmptyDocument(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Error saving cover letter to {path}: {reason}")]
    CoverLetterSave { path: String, reason: String },

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeGenieError>;
