//! Bundled first/middle/last name lists.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub const FIRST_NAMES_FILE: &str = "girl_boy_names.json";
pub const MIDDLE_NAMES_FILE: &str = "middle_names.json";
pub const LAST_NAMES_FILE: &str = "last_names.json";

static BUNDLED: Lazy<NameResources> = Lazy::new(|| {
    NameResources::from_json(
        include_str!("../data/girl_boy_names.json"),
        include_str!("../data/middle_names.json"),
        include_str!("../data/last_names.json"),
    )
    .expect("bundled name lists are valid")
});

#[derive(Debug, Error)]
pub enum NameListError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{list} name list has an empty {gender} bucket")]
    EmptyBucket { list: &'static str, gender: Gender },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Girls,
    Boys,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Girls, Gender::Boys];

    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Gender::Girls
        } else {
            Gender::Boys
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Girls => write!(f, "girls"),
            Gender::Boys => write!(f, "boys"),
        }
    }
}

/// One resource file: names bucketed by gender.
#[derive(Debug, Clone, Deserialize)]
pub struct NameList {
    pub girls: Vec<String>,
    pub boys: Vec<String>,
}

impl NameList {
    pub fn bucket(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Girls => &self.girls,
            Gender::Boys => &self.boys,
        }
    }

    fn check(&self, list: &'static str) -> Result<(), NameListError> {
        for gender in Gender::ALL {
            if self.bucket(gender).is_empty() {
                return Err(NameListError::EmptyBucket { list, gender });
            }
        }
        Ok(())
    }

    fn pick<R: RngCore + ?Sized>(&self, gender: Gender, rng: &mut R) -> &str {
        // buckets are checked non-empty at load time
        self.bucket(gender)
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct NameResources {
    pub first: NameList,
    pub middle: NameList,
    pub last: NameList,
}

impl NameResources {
    /// The lists compiled into the crate. Parsed once, on first use.
    pub fn bundled() -> &'static NameResources {
        &BUNDLED
    }

    pub fn from_json(first: &str, middle: &str, last: &str) -> Result<Self, NameListError> {
        let resources = Self {
            first: serde_json::from_str(first)?,
            middle: serde_json::from_str(middle)?,
            last: serde_json::from_str(last)?,
        };
        resources.first.check("first")?;
        resources.middle.check("middle")?;
        resources.last.check("last")?;
        Ok(resources)
    }

    /// Loads the three resource files from `dir`, using the same file names
    /// as the bundled set.
    pub fn from_dir(dir: &Path) -> Result<Self, NameListError> {
        let read = |file: &str| {
            let path = dir.join(file);
            fs::read_to_string(&path).map_err(|source| NameListError::Io {
                path: path.display().to_string(),
                source,
            })
        };
        let resources = Self::from_json(
            &read(FIRST_NAMES_FILE)?,
            &read(MIDDLE_NAMES_FILE)?,
            &read(LAST_NAMES_FILE)?,
        )?;
        info!(dir = %dir.display(), "loaded name lists");
        Ok(resources)
    }

    pub fn first_name<R: RngCore + ?Sized>(&self, rng: &mut R) -> String {
        self.first.pick(Gender::random(rng), rng).to_string()
    }

    pub fn middle_name<R: RngCore + ?Sized>(&self, rng: &mut R) -> String {
        self.middle.pick(Gender::random(rng), rng).to_string()
    }

    pub fn last_name<R: RngCore + ?Sized>(&self, rng: &mut R) -> String {
        self.last.pick(Gender::random(rng), rng).to_string()
    }

    /// First, optional middle and last name drawn from one gender bucket.
    pub fn full_name<R: RngCore + ?Sized>(&self, middle: bool, rng: &mut R) -> String {
        let gender = Gender::random(rng);
        let first = self.first.pick(gender, rng);
        let last = self.last.pick(gender, rng);
        if middle {
            let mid = self.middle.pick(gender, rng);
            format!("{first} {mid} {last}")
        } else {
            format!("{first} {last}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_lists_are_populated() {
        let names = NameResources::bundled();
        for gender in Gender::ALL {
            assert!(!names.first.bucket(gender).is_empty());
            assert!(!names.middle.bucket(gender).is_empty());
            assert!(!names.last.bucket(gender).is_empty());
        }
    }

    #[test]
    fn empty_bucket_is_rejected() {
        let ok = r#"{"girls": ["Ann"], "boys": ["Bob"]}"#;
        let empty = r#"{"girls": [], "boys": ["Bob"]}"#;
        let err = NameResources::from_json(ok, empty, ok).unwrap_err();
        assert!(matches!(
            err,
            NameListError::EmptyBucket { list: "middle", gender: Gender::Girls }
        ));
    }
}
