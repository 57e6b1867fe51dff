//! Document type detection by extension

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Docx,
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "docx" => FileType::Docx,
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    /// `None` when the path has no (UTF-8) extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
    }

    /// Plain-text formats accepted for job descriptions
    pub fn is_plain_text(&self) -> bool {
        matches!(self, FileType::Text | FileType::Markdown)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileType::Docx => "Word document",
            FileType::Pdf => "PDF",
            FileType::Text => "plain text file",
            FileType::Markdown => "markdown file",
            FileType::Unknown => "unknown file type",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions_are_case_insensitive() {
        assert_eq!(FileType::from_extension("DOCX"), FileType::Docx);
        assert_eq!(FileType::from_extension("Pdf"), FileType::Pdf);
        assert_eq!(FileType::from_extension("markdown"), FileType::Markdown);
        assert_eq!(FileType::from_extension("doc"), FileType::Unknown);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(FileType::from_path(Path::new("cv/resume.docx")), Some(FileType::Docx));
        assert_eq!(FileType::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_only_text_formats_are_plain_text() {
        assert!(FileType::Text.is_plain_text());
        assert!(FileType::Markdown.is_plain_text());
        assert!(!FileType::Docx.is_plain_text());
        assert!(!FileType::Pdf.is_plain_text());
    }
}
