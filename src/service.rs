//! One entry point per tool, shared by the subcommands and the interactive menu

use crate::config::Config;
use crate::error::Result;
use crate::input::InputManager;
use crate::output::cover_letter::{save_cover_letter, CoverLetterRequest};
use crate::output::report::*;
use crate::processing::ats_matcher::ATSMatcher;
use crate::processing::enhancer::ResumeEnhancer;
use crate::processing::ranker::{validate_job_descriptions, ResumeRanker};
use crate::tool::Tool;
use log::info;
use std::path::{Path, PathBuf};

/// Where a job description comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSource {
    Text(String),
    File(PathBuf),
}

pub async fn load_job_description(input_manager: &InputManager, source: &JobSource) -> Result<String> {
    match source {
        JobSource::Text(text) => Ok(text.clone()),
        JobSource::File(path) => input_manager.extract_job_description(path).await,
    }
}

pub async fn check_ats(config: &Config, resume: &Path, job: &JobSource) -> Result<AtsReport> {
    let input_manager = InputManager::new();
    let resume_text = input_manager.extract_resume(resume).await?;
    let job_text = load_job_description(&input_manager, job).await?;

    let matcher = ATSMatcher::with_sections(
        config.analysis.common_sections.clone(),
        config.analysis.min_word_count,
    )?;
    let result = matcher.match_against_job_description(&resume_text, &job_text);
    let formatting = matcher.check_formatting(&resume_text);

    info!("ATS score for {}: {}/100", resume.display(), result.score);

    Ok(AtsReport {
        metadata: ReportMetadata::new(Tool::CheckAts, Some(resume.display().to_string())),
        result,
        formatting,
    })
}

pub async fn rank_resume(resume: &Path, jobs: &[JobSource]) -> Result<RankingReport> {
    let input_manager = InputManager::new();
    let resume_text = input_manager.extract_resume(resume).await?;

    let mut job_texts = Vec::with_capacity(jobs.len());
    for job in jobs {
        job_texts.push(load_job_description(&input_manager, job).await?);
    }
    validate_job_descriptions(&job_texts)?;

    let result = ResumeRanker::new().rank_job_descriptions(&resume_text, &job_texts)?;

    if let Some(best) = result.best_match() {
        info!(
            "Best match for {}: job description {} ({:.2}%)",
            resume.display(),
            best.job_description_index,
            best.score
        );
    }

    Ok(RankingReport {
        metadata: ReportMetadata::new(Tool::RankResume, Some(resume.display().to_string())),
        result,
    })
}

pub async fn enhance_resume(
    config: &Config,
    resume: &Path,
    job: &JobSource,
    limit: Option<usize>,
) -> Result<EnhancementReport> {
    let input_manager = InputManager::new();
    let resume_text = input_manager.extract_resume(resume).await?;
    let job_text = load_job_description(&input_manager, job).await?;

    let limit = limit.unwrap_or(config.analysis.top_missing_limit);
    let suggestions = ResumeEnhancer::new().suggest_top_missing_keywords(&resume_text, &job_text, limit);

    info!("{} keyword suggestions for {}", suggestions.len(), resume.display());

    Ok(EnhancementReport {
        metadata: ReportMetadata::new(Tool::EnhanceResume, Some(resume.display().to_string())),
        limit,
        suggestions,
    })
}

/// Render the letter and, when `save_to` is given, write it as a Word document
pub async fn generate_cover_letter(
    request: &CoverLetterRequest,
    save_to: Option<&Path>,
) -> Result<CoverLetterReport> {
    let letter = request.render()?;

    let saved_to = match save_to {
        Some(path) => {
            save_cover_letter(&letter, path).await?;
            Some(path.display().to_string())
        }
        None => None,
    };

    Ok(CoverLetterReport {
        metadata: ReportMetadata::new(Tool::GenerateCoverLetter, None),
        letter,
        saved_to,
    })
}
