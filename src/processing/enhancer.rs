//! Keyword-gap suggestions for improving a resume

use crate::processing::text_processor::TextProcessor;
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSuggestion {
    pub keyword: String,
    /// Occurrences in the job description
    pub frequency: usize,
}

pub struct ResumeEnhancer {
    text_processor: TextProcessor,
}

impl Default for ResumeEnhancer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeEnhancer {
    pub fn new() -> Self {
        Self {
            text_processor: TextProcessor::new(),
        }
    }

    /// Most frequent job keywords that are absent from the resume's keyword set.
    ///
    /// Unlike the ATS check this is a whole-token test: "java" is missing from a
    /// resume that only mentions "javascript".
    pub fn suggest_top_missing_keywords(
        &self,
        resume_text: &str,
        job_description_text: &str,
        limit: usize,
    ) -> Vec<KeywordSuggestion> {
        let jd_frequencies = self.text_processor.keyword_frequencies(job_description_text);
        let resume_keywords = self.text_processor.keyword_set(resume_text);

        let mut missing: Vec<KeywordSuggestion> = jd_frequencies
            .iter()
            .filter(|(keyword, _)| !resume_keywords.contains(*keyword))
            .map(|(keyword, frequency)| KeywordSuggestion {
                keyword: keyword.to_string(),
                frequency,
            })
            .collect();

        debug!(
            "{} unique job keywords, {} missing from resume",
            jd_frequencies.len(),
            missing.len()
        );

        missing.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        missing.truncate(limit);
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_by_frequency_then_first_seen() {
        let enhancer = ResumeEnhancer::new();
        let jd = "kafka spark kafka airflow spark kafka python";

        let suggestions = enhancer.suggest_top_missing_keywords("python developer", jd, 10);
        let keywords: Vec<&str> = suggestions.iter().map(|s| s.keyword.as_str()).collect();

        assert_eq!(keywords, vec!["kafka", "spark", "airflow"]);
        assert_eq!(suggestions[0].frequency, 3);
        assert_eq!(suggestions[1].frequency, 2);
    }

    #[test]
    fn test_uses_whole_token_membership() {
        let enhancer = ResumeEnhancer::new();

        let suggestions = enhancer.suggest_top_missing_keywords("javascript expert", "java", 10);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].keyword, "java");
    }

    #[test]
    fn test_respects_limit_and_excludes_resume_keywords() {
        let enhancer = ResumeEnhancer::new();
        let jd = "one1 two2 three3 four4 five5 six6 seven7 eight8 nine9 ten10 eleven11 twelve12 rust";
        let resume = "Rust engineer";

        let suggestions = enhancer.suggest_top_missing_keywords(resume, jd, DEFAULT_SUGGESTION_LIMIT);
        let resume_keywords = TextProcessor::new().keyword_set(resume);

        assert_eq!(suggestions.len(), DEFAULT_SUGGESTION_LIMIT);
        assert!(suggestions.iter().all(|s| !resume_keywords.contains(&s.keyword)));
        assert_eq!(suggestions[0].keyword, "one1");
    }

    #[test]
    fn test_nothing_missing() {
        let enhancer = ResumeEnhancer::new();
        let suggestions = enhancer.suggest_top_missing_keywords("rust and go and sql", "Rust, SQL", 10);

        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_zero_limit() {
        let enhancer = ResumeEnhancer::new();
        assert!(enhancer.suggest_top_missing_keywords("", "kafka", 0).is_empty());
    }
}
