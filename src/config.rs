//! Configuration management for resume genie

use crate::error::{Result, ResumeGenieError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
    pub cover_letter: CoverLetterConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Resumes with fewer whitespace-separated words are flagged as too short
    pub min_word_count: usize,
    pub top_missing_limit: usize,
    pub common_sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterConfig {
    pub output_dir: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        let output_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Documents");

        Self {
            analysis: AnalysisConfig {
                min_word_count: 150,
                top_missing_limit: 10,
                common_sections: crate::processing::ats_matcher::COMMON_SECTIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
            cover_letter: CoverLetterConfig {
                output_dir,
                file_name: "Cover_Letter.docx".to_string(),
            },
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults if nothing is there yet
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeGenieError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeGenieError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-genie")
            .join("config.toml")
    }

    pub fn cover_letter_path(&self) -> PathBuf {
        self.cover_letter.output_dir.join(&self.cover_letter.file_name)
    }

    fn validate(&self) -> Result<()> {
        if self.analysis.top_missing_limit == 0 {
            return Err(ResumeGenieError::Configuration(
                "analysis.top_missing_limit must be at least 1".to_string(),
            ));
        }
        if self.cover_letter.file_name.trim().is_empty() {
            return Err(ResumeGenieError::Configuration(
                "cover_letter.file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.analysis.min_word_count = 200;
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.analysis.min_word_count, 200);
        assert_eq!(loaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ResumeGenieError::Configuration(_))
        ));
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.analysis.top_missing_limit = 0;
        config.save_to(&path).unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_default_cover_letter_path() {
        let config = Config::default();
        let path = config.cover_letter_path();

        assert!(path.ends_with("Documents/Cover_Letter.docx"));
    }
}
