//! Report structures produced by each tool

use crate::processing::ats_matcher::{FormattingReport, MatchResult};
use crate::processing::enhancer::KeywordSuggestion;
use crate::processing::ranker::RankingResult;
use crate::tool::Tool;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub tool: Tool,
    pub generated_at: DateTime<Utc>,
    pub resume_path: Option<String>,
    pub version: String,
}

impl ReportMetadata {
    pub fn new(tool: Tool, resume_path: Option<String>) -> Self {
        Self {
            tool,
            generated_at: Utc::now(),
            resume_path,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub metadata: ReportMetadata,
    pub result: MatchResult,
    pub formatting: FormattingReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub metadata: ReportMetadata,
    pub result: RankingResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancementReport {
    pub metadata: ReportMetadata,
    pub limit: usize,
    pub suggestions: Vec<KeywordSuggestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterReport {
    pub metadata: ReportMetadata,
    pub letter: String,
    pub saved_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Ats(AtsReport),
    Ranking(RankingReport),
    Enhancement(EnhancementReport),
    CoverLetter(CoverLetterReport),
}

impl Report {
    pub fn metadata(&self) -> &ReportMetadata {
        match self {
            Report::Ats(r) => &r.metadata,
            Report::Ranking(r) => &r.metadata,
            Report::Enhancement(r) => &r.metadata,
            Report::CoverLetter(r) => &r.metadata,
        }
    }
}
