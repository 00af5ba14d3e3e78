//! Basic text analysis.

use crate::readability::{self, ReadabilityReport};
use crate::sentiment::Lexicon;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Flesch-Kincaid grade at or above which text counts as difficult.
pub const DIFFICULT_GRADE: f64 = 13.0;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("could not detect a language")]
    LanguageUndetected,
    #[error("language {0} has no ISO 639-1 code")]
    NoIso6391Code(String),
}

/// VADER compound score, -1.0 (negative) ..= 1.0 (positive).
pub fn text_polarity(text: &str) -> f64 {
    let analyzer = SentimentIntensityAnalyzer::new();
    let scores = analyzer.polarity_scores(text);
    scores.get("compound").copied().unwrap_or(0.0).clamp(-1.0, 1.0)
}

/// 0.0 (objective) ..= 1.0 (subjective).
pub fn text_subjectivity(text: &str) -> f64 {
    Lexicon::bundled().analyze(text).subjectivity
}

/// Case-insensitive word counts with punctuation removed.
pub fn word_freq(text: &str) -> HashMap<String, usize> {
    let lowered = text.to_lowercase();
    let clean = NON_WORD.replace_all(&lowered, "");
    let mut freq = HashMap::new();
    for word in clean.split_whitespace() {
        *freq.entry(word.to_string()).or_insert(0) += 1;
    }
    freq
}

/// Two-letter ISO 639-1 code of the text's most likely language.
pub fn detect_lang(text: &str) -> Result<&'static str, AnalysisError> {
    let info = whatlang::detect(text).ok_or(AnalysisError::LanguageUndetected)?;
    let code = info.lang().code();
    debug!(lang = code, confidence = info.confidence(), "detected language");
    isolang::Language::from_639_3(code)
        .and_then(|lang| lang.to_639_1())
        .ok_or_else(|| AnalysisError::NoIso6391Code(code.to_string()))
}

pub fn text_difficulty(text: &str) -> ReadabilityReport {
    readability::analyze(text)
}

pub fn text_is_difficult(text: &str) -> bool {
    is_difficult_at(text, DIFFICULT_GRADE)
}

/// True when the Flesch-Kincaid grade of `text` reaches `grade`.
pub fn is_difficult_at(text: &str, grade: f64) -> bool {
    readability::analyze(text).flesch_kincaid_grade >= grade
}
