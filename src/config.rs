use crate::analysis::DIFFICULT_GRADE;
use crate::generator::{DEFAULT_FULL_NAMES_AMOUNT, DEFAULT_ID_LENGTH, DEFAULT_PASSWORD_LENGTH};
use crate::hash::{HashAlgorithm, HashError, DEFAULT_ALGORITHM};
use config as config_rs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use validator::Validate;

pub const ENV_PREFIX: &str = "TEXTKIT";

/// Defaults applied by [`crate::toolkit::TextKit`].
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct KitConfig {
    #[validate(range(min = 1, max = 4096))]
    pub id_length: usize,
    #[validate(range(min = 1, max = 4096))]
    pub password_length: usize,
    #[validate(range(min = 1, max = 100000))]
    pub full_names_amount: usize,
    pub include_middle_name: bool,
    pub hash_algorithm: String,
    #[validate(range(min = 0.0, max = 30.0))]
    pub difficulty_grade: f64,
    /// Directory holding custom name lists. The bundled lists are used when unset.
    #[serde(default)]
    pub names_dir: Option<PathBuf>,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            id_length: DEFAULT_ID_LENGTH,
            password_length: DEFAULT_PASSWORD_LENGTH,
            full_names_amount: DEFAULT_FULL_NAMES_AMOUNT,
            include_middle_name: false,
            hash_algorithm: DEFAULT_ALGORITHM.to_string(),
            difficulty_grade: DIFFICULT_GRADE,
            names_dir: None,
        }
    }
}

impl KitConfig {
    /// Range checks plus the hash algorithm name.
    pub fn check(&self) -> Result<HashAlgorithm, ConfigError> {
        self.validate()?;
        Ok(self.hash_algorithm.parse::<HashAlgorithm>()?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("hash error: {0}")]
    Hash(#[from] HashError),
}

/// Builds a [`KitConfig`] from defaults, an optional file and `TEXTKIT_*`
/// environment variables, later sources winning.
pub fn load_config(path: Option<&Path>) -> Result<KitConfig, ConfigError> {
    let defaults = KitConfig::default();

    let mut builder = config_rs::Config::builder()
        .set_default("id_length", defaults.id_length as i64)?
        .set_default("password_length", defaults.password_length as i64)?
        .set_default("full_names_amount", defaults.full_names_amount as i64)?
        .set_default("include_middle_name", defaults.include_middle_name)?
        .set_default("hash_algorithm", defaults.hash_algorithm)?
        .set_default("difficulty_grade", defaults.difficulty_grade)?;

    if let Some(path) = path {
        builder = builder.add_source(config_rs::File::from(path));
    }

    builder = builder.add_source(config_rs::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    let cfg: KitConfig = builder.build()?.try_deserialize()?;
    cfg.check()?;

    info!(
        hash_algorithm = %cfg.hash_algorithm,
        names_dir = ?cfg.names_dir,
        "loaded textkit config"
    );
    Ok(cfg)
}
