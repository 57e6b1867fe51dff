//! Fixed-template cover letter generation

use crate::error::{Result, ResumeGenieError};
use crate::output::docx_writer::DocxWriter;
use askama::Template;
use log::info;
use std::path::Path;

#[derive(Template)]
#[template(
    ext = "txt",
    source = "
Dear Hiring Manager at {{ company }},

I am writing to express my strong interest in the position of {{ job_title }} at your esteemed organization. With a solid background in relevant technical skills and a strong commitment to continuous learning, I believe I am well-suited for this role.

Upon reviewing the job description, I noticed a strong emphasis on data analysis, problem-solving, machine learning, data science expertise, and job-specific responsibilities. I have hands-on experience and a deep passion for these areas, which closely align with the requirements outlined for this role.

My resume reflects key achievements and contributions in data-driven projects, demonstrating my ability to derive actionable insights and contribute meaningfully to innovative solutions. I am confident that my technical proficiency and enthusiasm for data science make me a valuable candidate for this opportunity.

I would welcome the chance to further discuss how my skills and experience can contribute to {{ company }}\u{2019}s continued success. Thank you for considering my application. I look forward to the possibility of joining your dynamic team.

Sincerely,
{{ name }}
"
)]
struct CoverLetterTemplate<'a> {
    name: &'a str,
    job_title: &'a str,
    company: &'a str,
}

/// Applicant details substituted into the letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverLetterRequest {
    pub name: String,
    pub job_title: String,
    pub company: String,
}

impl CoverLetterRequest {
    /// All three fields are required; surrounding whitespace is dropped
    pub fn new(name: &str, job_title: &str, company: &str) -> Result<Self> {
        let fields = [("name", name), ("job title", job_title), ("company", company)];
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();

        if !missing.is_empty() {
            return Err(ResumeGenieError::InvalidInput(format!(
                "Cover letter needs a {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            name: name.trim().to_string(),
            job_title: job_title.trim().to_string(),
            company: company.trim().to_string(),
        })
    }

    pub fn render(&self) -> Result<String> {
        render_cover_letter(&self.name, &self.job_title, &self.company)
    }
}

/// Render the letter, trimmed of surrounding whitespace
pub fn render_cover_letter(name: &str, job_title: &str, company: &str) -> Result<String> {
    let letter = CoverLetterTemplate {
        name,
        job_title,
        company,
    }
    .render()?;

    Ok(letter.trim().to_string())
}

/// Write the letter as a single-paragraph Word document, creating parent directories
pub async fn save_cover_letter(letter: &str, path: &Path) -> Result<()> {
    let save_error = |reason: String| ResumeGenieError::CoverLetterSave {
        path: path.display().to_string(),
        reason,
    };

    let bytes = DocxWriter::new()
        .paragraph(letter)
        .to_bytes()
        .map_err(|e| save_error(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| save_error(e.to_string()))?;
        }
    }

    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| save_error(e.to_string()))?;

    info!("Cover letter saved to {}", path.display());
    Ok(())
}
