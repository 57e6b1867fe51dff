//! CLI interface for resume genie

use crate::service::JobSource;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-genie")]
#[command(about = "Resume ATS checker, job description ranker, keyword enhancer and cover letter generator")]
#[command(long_about = "Compare a resume against job descriptions with keyword matching and TF-IDF similarity, \
find missing keywords, and generate a cover letter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check keyword compatibility of a resume with a job description
    Ats {
        /// Path to resume file (DOCX, PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        #[command(flatten)]
        job: SingleJobArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Rank two job descriptions by similarity to a resume
    Rank {
        /// Path to resume file (DOCX, PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job description text; inline texts are numbered before files
        #[arg(short, long = "job")]
        jobs: Vec<String>,

        /// Path to a job description file (TXT, MD)
        #[arg(long = "job-file")]
        job_files: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Suggest the most frequent job keywords missing from a resume
    Enhance {
        /// Path to resume file (DOCX, PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        #[command(flatten)]
        job: SingleJobArgs,

        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a cover letter from a fixed template
    CoverLetter {
        /// Your full name
        #[arg(short, long)]
        name: String,

        /// The job title
        #[arg(short, long)]
        title: String,

        /// The company name
        #[arg(long)]
        company: String,

        /// Save as a Word document (default location from config when no path is given)
        #[arg(short, long, num_args = 0..=1)]
        save: Option<Option<PathBuf>>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Interactive menu over all tools
    Menu,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SingleJobArgs {
    /// Job description text
    #[arg(short, long)]
    pub job: Option<String>,

    /// Path to job description file (TXT, MD)
    #[arg(long)]
    pub job_file: Option<PathBuf>,
}

impl SingleJobArgs {
    pub fn source(&self) -> Result<JobSource, String> {
        match (&self.job, &self.job_file) {
            (Some(text), None) => Ok(JobSource::Text(text.clone())),
            (None, Some(path)) => {
                validate_file_extension(path, crate::input::manager::JOB_DESCRIPTION_EXTENSIONS)?;
                Ok(JobSource::File(path.clone()))
            }
            _ => Err("Provide exactly one of --job or --job-file".to_string()),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format: console, json, markdown
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Include extra detail in console output
    #[arg(short, long)]
    pub detailed: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Inline job texts first, then files, in the order given
pub fn rank_job_sources(jobs: &[String], job_files: &[PathBuf]) -> Result<Vec<JobSource>, String> {
    let mut sources: Vec<JobSource> = jobs.iter().cloned().map(JobSource::Text).collect();
    for path in job_files {
        validate_file_extension(path, crate::input::manager::JOB_DESCRIPTION_EXTENSIONS)?;
        sources.push(JobSource::File(path.clone()));
    }
    Ok(sources)
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
