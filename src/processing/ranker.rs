//! Ranking of job descriptions by TF-IDF cosine similarity to a resume

use crate::error::{Result, ResumeGenieError};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// The ranker compares the resume against exactly this many job descriptions
pub const REQUIRED_JOB_DESCRIPTIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedJob {
    /// 1-based position of the job description as submitted
    pub job_description_index: usize,
    /// Cosine similarity scaled to 0..=100
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub rankings: Vec<RankedJob>,
}

impl RankingResult {
    pub fn best_match(&self) -> Option<&RankedJob> {
        self.rankings.first()
    }
}

/// TF-IDF vectorizer fitted on a small, fixed corpus.
///
/// Tokens are lowercase runs of two or more word characters, term frequency is
/// the raw count, and idf is smoothed: `ln((1 + n) / (1 + df)) + 1`. Rows are
/// L2-normalised, so the cosine of two rows is their dot product.
pub struct TfIdfVectorizer {
    token_regex: Regex,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        let token_regex = Regex::new(r"\b\w\w+\b").expect("Invalid token regex");
        Self { token_regex }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_regex
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Fit on `documents` and return one normalised sparse row per document
    pub fn fit_transform(&self, documents: &[&str]) -> Vec<BTreeMap<String, f64>> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|doc| self.tokenize(doc)).collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        tokenized
            .iter()
            .map(|tokens| {
                let mut row: BTreeMap<String, f64> = BTreeMap::new();
                for token in tokens {
                    *row.entry(token.clone()).or_insert(0.0) += 1.0;
                }
                for (token, weight) in row.iter_mut() {
                    let df = document_frequency.get(token.as_str()).copied().unwrap_or(0) as f64;
                    let idf = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
                    *weight *= idf;
                }
                l2_normalize(&mut row);
                row
            })
            .collect()
    }

    /// Cosine similarity of two texts in a vector space built from just those two
    pub fn pairwise_similarity(&self, left: &str, right: &str) -> f64 {
        let rows = self.fit_transform(&[left, right]);
        cosine_similarity(&rows[0], &rows[1])
    }
}

fn l2_normalize(row: &mut BTreeMap<String, f64>) {
    let norm = row.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in row.values_mut() {
            *weight /= norm;
        }
    }
}

/// Cosine similarity of two sparse vectors; 0 when either is all zeros
pub fn cosine_similarity(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(token, wa)| b.get(token).map(|wb| wa * wb))
        .sum();
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

pub struct ResumeRanker {
    vectorizer: TfIdfVectorizer,
}

impl Default for ResumeRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeRanker {
    pub fn new() -> Self {
        Self {
            vectorizer: TfIdfVectorizer::new(),
        }
    }

    /// Score the resume against each job description and sort best first.
    ///
    /// Each pairing gets its own two-document vector space, so idf weights are
    /// not shared between job descriptions.
    pub fn rank_job_descriptions(&self, resume_text: &str, job_descriptions: &[String]) -> Result<RankingResult> {
        let job_descriptions = validate_job_descriptions(job_descriptions)?;

        let mut rankings: Vec<RankedJob> = job_descriptions
            .iter()
            .enumerate()
            .map(|(idx, jd)| {
                let score = self.vectorizer.pairwise_similarity(resume_text, jd) * 100.0;
                debug!("Job description {} similarity: {:.4}", idx + 1, score);
                RankedJob {
                    job_description_index: idx + 1,
                    score,
                }
            })
            .collect();

        // sort_by is stable: equal scores keep submission order
        rankings.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(RankingResult { rankings })
    }
}

/// Trimmed job descriptions, or an error unless there are exactly two non-empty ones
pub fn validate_job_descriptions(job_descriptions: &[String]) -> Result<Vec<&str>> {
    let trimmed: Vec<&str> = job_descriptions
        .iter()
        .map(|jd| jd.trim())
        .filter(|jd| !jd.is_empty())
        .collect();

    if trimmed.len() != REQUIRED_JOB_DESCRIPTIONS || job_descriptions.len() != REQUIRED_JOB_DESCRIPTIONS {
        return Err(ResumeGenieError::InvalidInput(format!(
            "Please provide {} non-empty job descriptions (got {} non-empty of {})",
            REQUIRED_JOB_DESCRIPTIONS,
            trimmed.len(),
            job_descriptions.len()
        )));
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jds(a: &str, b: &str) -> Vec<String> {
        vec![a.to_string(), b.to_string()]
    }

    #[test]
    fn test_tokenizer_keeps_two_letter_words() {
        let vectorizer = TfIdfVectorizer::new();
        assert_eq!(vectorizer.tokenize("Go is a ML language"), vec!["go", "is", "ml", "language"]);
    }

    #[test]
    fn test_identical_documents_have_similarity_one() {
        let vectorizer = TfIdfVectorizer::new();
        let similarity = vectorizer.pairwise_similarity("rust tokio serde", "Rust Tokio Serde");

        assert!((similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents_have_similarity_zero() {
        let vectorizer = TfIdfVectorizer::new();
        assert_eq!(vectorizer.pairwise_similarity("rust tokio", "python django"), 0.0);
    }

    #[test]
    fn test_smoothed_idf_weights() {
        let vectorizer = TfIdfVectorizer::new();
        let rows = vectorizer.fit_transform(&["aa bb", "aa cc"]);

        // shared term: idf 1; unique term: ln(3/2) + 1
        let unique_idf = (1.5f64).ln() + 1.0;
        let norm = (1.0 + unique_idf * unique_idf).sqrt();
        assert!((rows[0]["aa"] - 1.0 / norm).abs() < 1e-12);
        assert!((rows[0]["bb"] - unique_idf / norm).abs() < 1e-12);

        let expected = 1.0 / (norm * norm);
        assert!((cosine_similarity(&rows[0], &rows[1]) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_vector_similarity_is_zero() {
        let vectorizer = TfIdfVectorizer::new();
        assert_eq!(vectorizer.pairwise_similarity("a b c", "rust"), 0.0);
    }

    #[test]
    fn test_identical_job_descriptions_tie_and_keep_order() {
        let ranker = ResumeRanker::new();
        let jd = "Backend engineer with Rust and PostgreSQL experience";
        let result = ranker
            .rank_job_descriptions("rust engineer postgresql", &jds(jd, jd))
            .unwrap();

        assert_eq!(result.rankings[0].score, result.rankings[1].score);
        assert_eq!(result.best_match().unwrap().job_description_index, 1);
        assert_eq!(result.rankings[1].job_description_index, 2);
    }

    #[test]
    fn test_better_job_description_ranks_first() {
        let ranker = ResumeRanker::new();
        let resume = "data scientist python pandas machine learning models";
        let result = ranker
            .rank_job_descriptions(
                resume,
                &jds("Frontend developer, React and CSS", "Data scientist: Python, pandas, machine learning"),
            )
            .unwrap();

        assert_eq!(result.best_match().unwrap().job_description_index, 2);
        assert!(result.rankings[0].score > result.rankings[1].score);
        for ranked in &result.rankings {
            assert!((0.0..=100.0 + 1e-9).contains(&ranked.score));
        }
    }

    #[test]
    fn test_requires_two_non_empty_job_descriptions() {
        let ranker = ResumeRanker::new();

        assert!(matches!(
            ranker.rank_job_descriptions("resume", &jds("rust", "   ")),
            Err(ResumeGenieError::InvalidInput(_))
        ));
        assert!(ranker.rank_job_descriptions("resume", &["rust".to_string()]).is_err());
        assert!(ranker
            .rank_job_descriptions("resume", &["a".to_string(), "b".to_string(), "c".to_string()])
            .is_err());
    }

    #[test]
    fn test_job_descriptions_are_trimmed() {
        let input = jds("  rust  ", "\ngo\n");
        let trimmed = validate_job_descriptions(&input).unwrap();
        assert_eq!(trimmed, vec!["rust", "go"]);
    }

    #[test]
    fn test_each_job_description_gets_its_own_vector_space() {
        let ranker = ResumeRanker::new();
        let vectorizer = TfIdfVectorizer::new();
        let resume = "rust tokio axum";
        let (first, second) = ("rust tokio", "rust python");

        let result = ranker.rank_job_descriptions(resume, &jds(first, second)).unwrap();
        let score_of = |index: usize| {
            result
                .rankings
                .iter()
                .find(|ranked| ranked.job_description_index == index)
                .unwrap()
                .score
        };

        assert_eq!(score_of(1), vectorizer.pairwise_similarity(resume, first) * 100.0);
        assert_eq!(score_of(2), vectorizer.pairwise_similarity(resume, second) * 100.0);

        // idf over all three documents gives a different cosine
        let shared = vectorizer.fit_transform(&[resume, first, second]);
        let shared_score = cosine_similarity(&shared[0], &shared[1]) * 100.0;
        assert!((score_of(1) - shared_score).abs() > 1e-6);
    }
}
