//! Keyword analysis: tokenization, ATS matching, ranking and enhancement

pub mod text_processor;
pub mod ats_matcher;
pub mod ranker;
pub mod enhancer;
