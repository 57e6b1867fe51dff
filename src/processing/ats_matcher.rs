//! ATS (Applicant Tracking System) keyword matching and scoring

use crate::error::{Result, ResumeGenieError};
use crate::processing::text_processor::{word_count, TextProcessor};
use aho_corasick::AhoCorasick;
use log::debug;
use serde::{Deserialize, Serialize};

/// Section headings a parser expects to find somewhere in a resume
pub const COMMON_SECTIONS: &[&str] = &["skills", "experience", "education", "projects", "summary"];

pub const DEFAULT_MIN_WORD_COUNT: usize = 150;

/// Keyword matcher for a resume against one job description
pub struct ATSMatcher {
    text_processor: TextProcessor,
    section_matcher: AhoCorasick,
    sections: Vec<String>,
    min_word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Keywords of the job description, in order, duplicates kept
    pub jd_keywords: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// 0..=100
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingReport {
    pub sections_found: Vec<String>,
    pub has_standard_sections: bool,
    pub word_count: usize,
    pub min_word_count: usize,
    pub too_short: bool,
}

impl ATSMatcher {
    pub fn new() -> Result<Self> {
        Self::with_sections(
            COMMON_SECTIONS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_MIN_WORD_COUNT,
        )
    }

    pub fn with_sections(sections: Vec<String>, min_word_count: usize) -> Result<Self> {
        let sections: Vec<String> = sections
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let section_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&sections)
            .map_err(|e| ResumeGenieError::InvalidInput(format!("Failed to build section matcher: {}", e)))?;

        Ok(Self {
            text_processor: TextProcessor::new(),
            section_matcher,
            sections,
            min_word_count,
        })
    }

    /// A job keyword counts as matched when it occurs anywhere in the lowercased
    /// resume text, including inside longer words.
    pub fn match_against_job_description(&self, resume_text: &str, job_description_text: &str) -> MatchResult {
        let resume_lower = resume_text.to_lowercase();
        let jd_keywords = self.text_processor.extract_keywords(job_description_text);

        let (matched, missing): (Vec<String>, Vec<String>) = jd_keywords
            .iter()
            .cloned()
            .partition(|keyword| resume_lower.contains(keyword.as_str()));

        let score = percentage(matched.len(), jd_keywords.len());

        debug!(
            "ATS match: {} job keywords, {} matched, score {}",
            jd_keywords.len(),
            matched.len(),
            score
        );

        MatchResult {
            jd_keywords,
            matched,
            missing,
            score,
        }
    }

    /// Section presence and length checks on the resume; these do not affect the score
    pub fn check_formatting(&self, resume_text: &str) -> FormattingReport {
        let resume_lower = resume_text.to_lowercase();

        let mut hits = vec![false; self.sections.len()];
        for mat in self.section_matcher.find_overlapping_iter(&resume_lower) {
            hits[mat.pattern().as_usize()] = true;
        }

        let sections_found: Vec<String> = self
            .sections
            .iter()
            .zip(hits)
            .filter(|(_, hit)| *hit)
            .map(|(section, _)| section.clone())
            .collect();

        let words = word_count(resume_text);

        FormattingReport {
            has_standard_sections: !sections_found.is_empty(),
            sections_found,
            word_count: words,
            min_word_count: self.min_word_count,
            too_short: words < self.min_word_count,
        }
    }
}

/// `round(100 * part / whole)` with ties to even, 0 when `whole` is 0
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round_ties_even() as u32
}
