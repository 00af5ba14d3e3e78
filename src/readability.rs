//! Readability metrics: Flesch reading ease, Flesch-Kincaid grade, Gunning
//! fog, SMOG, ARI, Coleman-Liau and a consensus grade.
//!
//! Words and sentences come from Unicode segmentation; syllables are
//! estimated from vowel groups.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use unicode_segmentation::UnicodeSegmentation;

/// Sentences with this many words or fewer do not count as sentences.
const MIN_SENTENCE_WORDS: usize = 2;
/// SMOG is only defined for three or more sentences.
const SMOG_MIN_SENTENCES: usize = 3;
const POLYSYLLABLE: usize = 3;
const EMPTY_CONSENSUS: &str = "n/a";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Score(f64),
    Grade(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityReport {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
    pub smog_index: f64,
    pub automated_readability_index: f64,
    pub consensus_grade: String,
}

impl ReadabilityReport {
    /// Flat metric-name -> value mapping with exactly six keys.
    pub fn to_map(&self) -> BTreeMap<&'static str, MetricValue> {
        BTreeMap::from([
            ("flesch_reading_ease", MetricValue::Score(self.flesch_reading_ease)),
            ("flesch_kincaid_grade", MetricValue::Score(self.flesch_kincaid_grade)),
            ("gunning_fog", MetricValue::Score(self.gunning_fog)),
            ("smog_index", MetricValue::Score(self.smog_index)),
            (
                "automated_readability_index",
                MetricValue::Score(self.automated_readability_index),
            ),
            ("consensus_grade", MetricValue::Grade(self.consensus_grade.clone())),
        ])
    }
}

/// Raw counts every formula is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStats {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
    pub polysyllables: usize,
    pub letters: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        let mut stats = TextStats::default();
        for word in text.unicode_words() {
            let syllables = count_syllables(word);
            stats.words += 1;
            stats.syllables += syllables;
            if syllables >= POLYSYLLABLE {
                stats.polysyllables += 1;
            }
            stats.letters += word.chars().filter(|c| c.is_alphanumeric()).count();
        }

        let counted = text
            .unicode_sentences()
            .filter(|s| s.unicode_words().count() > MIN_SENTENCE_WORDS)
            .count();
        stats.sentences = counted.max(1);
        stats
    }

    fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    fn syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words as f64
    }

    pub fn flesch_reading_ease(&self) -> f64 {
        206.835 - 1.015 * self.words_per_sentence() - 84.6 * self.syllables_per_word()
    }

    pub fn flesch_kincaid_grade(&self) -> f64 {
        0.39 * self.words_per_sentence() + 11.8 * self.syllables_per_word() - 15.59
    }

    pub fn gunning_fog(&self) -> f64 {
        let complex = 100.0 * self.polysyllables as f64 / self.words as f64;
        0.4 * (self.words_per_sentence() + complex)
    }

    pub fn smog_index(&self) -> f64 {
        if self.sentences < SMOG_MIN_SENTENCES {
            return 0.0;
        }
        1.043 * (30.0 * self.polysyllables as f64 / self.sentences as f64).sqrt() + 3.1291
    }

    pub fn automated_readability_index(&self) -> f64 {
        4.71 * (self.letters as f64 / self.words as f64) + 0.5 * self.words_per_sentence() - 21.43
    }

    pub fn coleman_liau_index(&self) -> f64 {
        let letters_per_100 = 100.0 * self.letters as f64 / self.words as f64;
        let sentences_per_100 = 100.0 * self.sentences as f64 / self.words as f64;
        0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8
    }

    /// Grade most metrics agree on, e.g. "8th and 9th grade".
    pub fn consensus_grade(&self) -> String {
        let mut grades: Vec<i64> = Vec::new();
        let mut push_range = |score: f64| {
            let score = round2(score);
            grades.push(score.floor() as i64);
            grades.push(score.ceil() as i64);
        };
        push_range(self.flesch_kincaid_grade());
        push_range(self.smog_index());
        push_range(self.coleman_liau_index());
        push_range(self.automated_readability_index());
        push_range(self.gunning_fog());
        grades.extend(reading_ease_grades(self.flesch_reading_ease()));

        let mut counts: HashMap<i64, usize> = HashMap::new();
        for grade in &grades {
            *counts.entry(*grade).or_default() += 1;
        }
        // ties go to the grade seen first
        let mut best = grades[0];
        for grade in &grades {
            if counts[grade] > counts[&best] {
                best = *grade;
            }
        }
        format!("{} and {} grade", ordinal(best - 1), ordinal(best))
    }
}

fn reading_ease_grades(score: f64) -> Vec<i64> {
    match score {
        s if (90.0..100.0).contains(&s) => vec![5],
        s if (80.0..90.0).contains(&s) => vec![6],
        s if (70.0..80.0).contains(&s) => vec![7],
        s if (60.0..70.0).contains(&s) => vec![8, 9],
        s if (50.0..60.0).contains(&s) => vec![10],
        s if (40.0..50.0).contains(&s) => vec![11],
        s if (30.0..40.0).contains(&s) => vec![12],
        s if s >= 100.0 => vec![4],
        _ => vec![13],
    }
}

fn ordinal(n: i64) -> String {
    let suffix = match (n.rem_euclid(100), n.rem_euclid(10)) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimates syllables by counting vowel groups, ignoring a silent final
/// `e` (but not in a consonant + `le` ending) and a silent `ed`.
pub fn count_syllables(word: &str) -> usize {
    let w: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if w.is_empty() {
        return 0;
    }
    if w.len() <= 3 {
        return 1;
    }

    let n = w.len();
    let mut end = n;
    if w[n - 1] == 'e' && !(w[n - 2] == 'l' && !is_vowel(w[n - 3])) {
        end -= 1;
    } else if w[n - 2] == 'e' && w[n - 1] == 'd' && !matches!(w[n - 3], 't' | 'd') {
        end -= 2;
    }

    let mut groups = 0;
    let mut in_group = false;
    for &c in &w[..end] {
        let vowel = is_vowel(c);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }
    groups.max(1)
}

pub fn analyze(text: &str) -> ReadabilityReport {
    let stats = TextStats::from_text(text);
    if stats.words == 0 {
        return ReadabilityReport {
            flesch_reading_ease: 0.0,
            flesch_kincaid_grade: 0.0,
            gunning_fog: 0.0,
            smog_index: 0.0,
            automated_readability_index: 0.0,
            consensus_grade: EMPTY_CONSENSUS.to_string(),
        };
    }
    ReadabilityReport {
        flesch_reading_ease: round2(stats.flesch_reading_ease()),
        flesch_kincaid_grade: round2(stats.flesch_kincaid_grade()),
        gunning_fog: round2(stats.gunning_fog()),
        smog_index: round2(stats.smog_index()),
        automated_readability_index: round2(stats.automated_readability_index()),
        consensus_grade: stats.consensus_grade(),
    }
}
