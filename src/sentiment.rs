//! Lexicon-based sentiment scoring.
//!
//! Each lexicon word found in the text is one assessment carrying a polarity
//! and a subjectivity. An intensifier directly before the word scales both
//! values; a negation within the two preceding words flips polarity and
//! halves it. The text's score is the mean over all assessments.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

const NEGATION_FACTOR: f64 = -0.5;
const NEGATION_WINDOW: usize = 2;

static BUNDLED: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::from_json(include_str!("../data/sentiment_lexicon.json"))
        .expect("bundled sentiment lexicon is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    /// -1.0 (negative) ..= 1.0 (positive)
    pub polarity: f64,
    /// 0.0 (objective) ..= 1.0 (subjective)
    pub subjectivity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    words: HashMap<String, (f64, f64)>,
    #[serde(default)]
    intensifiers: HashMap<String, f64>,
    #[serde(default)]
    negations: HashSet<String>,
}

impl Lexicon {
    pub fn bundled() -> &'static Lexicon {
        &BUNDLED
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't") || word.ends_with("n\u{2019}t")
    }

    pub fn analyze(&self, text: &str) -> Sentiment {
        let words: Vec<String> = text.unicode_words().map(str::to_lowercase).collect();

        let mut total = Sentiment::default();
        let mut assessments = 0usize;

        for (i, word) in words.iter().enumerate() {
            let Some(&(mut polarity, mut subjectivity)) = self.words.get(word) else {
                continue;
            };

            if let Some(factor) = i
                .checked_sub(1)
                .and_then(|j| self.intensifiers.get(&words[j]))
            {
                polarity *= factor;
                subjectivity *= factor;
            }

            let window = &words[i.saturating_sub(NEGATION_WINDOW)..i];
            if window.iter().any(|w| self.is_negation(w)) {
                polarity *= NEGATION_FACTOR;
            }

            total.polarity += polarity.clamp(-1.0, 1.0);
            total.subjectivity += subjectivity.clamp(0.0, 1.0);
            assessments += 1;
        }

        if assessments == 0 {
            return Sentiment::default();
        }
        let n = assessments as f64;
        Sentiment {
            polarity: (total.polarity / n).clamp(-1.0, 1.0),
            subjectivity: (total.subjectivity / n).clamp(0.0, 1.0),
        }
    }
}
