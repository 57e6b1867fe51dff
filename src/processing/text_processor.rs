//! Tokenization and keyword extraction

use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Function words dropped before any keyword analysis
pub const STOP_WORDS: &[&str] = &[
    "and", "or", "with", "in", "on", "for", "the", "a", "an", "of", "to",
    "from", "at", "by", "is", "are", "this", "that", "as", "be", "have", "has",
];

/// Tokens must be strictly longer than this many characters
pub const MIN_KEYWORD_LENGTH: usize = 2;

pub struct TextProcessor {
    stop_words: HashSet<String>,
    word_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let word_regex = Regex::new(r"\w+").expect("Invalid word regex");

        Self {
            stop_words: STOP_WORDS.iter().map(|&s| s.to_string()).collect(),
            word_regex,
        }
    }

    /// Lowercase word tokens in positional order, stopwords and short words removed.
    /// Duplicates are kept so that frequencies can be computed downstream.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        self.word_regex
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|word| word.chars().count() > MIN_KEYWORD_LENGTH)
            .filter(|word| !self.stop_words.contains(*word))
            .map(str::to_string)
            .collect()
    }

    /// Unique keywords of a text, for discrete-token membership tests
    pub fn keyword_set(&self, text: &str) -> HashSet<String> {
        self.extract_keywords(text).into_iter().collect()
    }

    pub fn keyword_frequencies(&self, text: &str) -> KeywordFrequency {
        KeywordFrequency::from_tokens(self.extract_keywords(text))
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

/// Whitespace-separated word count, as used for the resume length check
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Token occurrence counts that remember first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordFrequency {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl KeywordFrequency {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut freq = Self::default();
        for token in tokens {
            freq.add(token.into());
        }
        freq
    }

    pub fn add(&mut self, token: String) {
        match self.index.get(&token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, 1));
            }
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Sum of all counts, equal to the number of tokens added
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Highest counts first; ties keep first-seen order
    pub fn top_n(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_keywords() {
        let processor = TextProcessor::new();
        assert!(processor.extract_keywords("").is_empty());
    }

    #[test]
    fn test_keyword_extraction_filters() {
        let processor = TextProcessor::new();
        let text = "The Rust developer is working on an API for the team, with SQL and Go.";

        let keywords = processor.extract_keywords(text);

        assert_eq!(
            keywords,
            vec!["rust", "developer", "working", "api", "team", "sql"]
        );
    }

    #[test]
    fn test_keywords_keep_order_and_duplicates() {
        let processor = TextProcessor::new();
        let keywords = processor.extract_keywords("Python, SQL; python! Docker python");

        assert_eq!(keywords, vec!["python", "sql", "python", "docker", "python"]);
    }

    #[test]
    fn test_word_characters_include_digits_and_underscore() {
        let processor = TextProcessor::new();
        let keywords = processor.extract_keywords("snake_case py3 c++ node.js 2024");

        assert_eq!(keywords, vec!["snake_case", "py3", "node", "2024"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let processor = TextProcessor::new();
        // two characters, four bytes
        let keywords = processor.extract_keywords("éé café");

        assert_eq!(keywords, vec!["café"]);
    }

    #[test]
    fn test_keyword_invariants() {
        let processor = TextProcessor::new();
        let text = "This is a role for an engineer that has to be at ease with \
                    data, ML and the cloud; experience in AWS or GCP is a plus.";

        let keywords = processor.extract_keywords(text);

        assert!(keywords.len() <= word_count(text));
        for keyword in &keywords {
            assert!(!processor.is_stop_word(keyword));
            assert!(keyword.chars().count() > MIN_KEYWORD_LENGTH);
            assert_eq!(keyword, &keyword.to_lowercase());
        }
    }

    #[test]
    fn test_frequencies_sum_to_token_count() {
        let processor = TextProcessor::new();
        let text = "rust rust tokio serde rust tokio axum";

        let tokens = processor.extract_keywords(text);
        let freq = KeywordFrequency::from_tokens(tokens.clone());

        assert_eq!(freq.total(), tokens.len());
        assert_eq!(freq.count("rust"), 3);
        assert_eq!(freq.count("tokio"), 2);
        assert_eq!(freq.count("missing"), 0);
        assert_eq!(freq.len(), 4);
    }

    #[test]
    fn test_top_n_ties_keep_first_seen_order() {
        let freq = KeywordFrequency::from_tokens(["beta", "alpha", "gamma", "alpha", "delta", "gamma"]);

        let top = freq.top_n(3);

        assert_eq!(top, vec![("alpha", 2), ("gamma", 2), ("beta", 1)]);
    }

    #[test]
    fn test_word_count_splits_on_whitespace() {
        assert_eq!(word_count("  one two\tthree\nfour  "), 4);
        assert_eq!(word_count(""), 0);
    }
}
