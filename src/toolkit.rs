//! Configured entry point.
//!
//! The free functions in each module take every option explicitly.
//! [`TextKit`] fixes those options once from a [`KitConfig`] and can count
//! what it does in a prometheus registry.

use crate::analysis;
use crate::config::KitConfig;
use crate::converters::{self, DecodeError};
use crate::errors::KitError;
use crate::generator;
use crate::hash::HashAlgorithm;
use crate::metrics::KitMetrics;
use crate::names::NameResources;
use prometheus::Registry;
use rand::rngs::OsRng;
use std::borrow::Cow;
use tracing::debug;

pub struct TextKit {
    config: KitConfig,
    hash_algorithm: HashAlgorithm,
    names: Cow<'static, NameResources>,
    metrics: Option<KitMetrics>,
}

impl TextKit {
    pub fn new(config: KitConfig) -> Result<Self, KitError> {
        let hash_algorithm = config.check()?;
        let names = match &config.names_dir {
            Some(dir) => Cow::Owned(NameResources::from_dir(dir)?),
            None => Cow::Borrowed(NameResources::bundled()),
        };
        Ok(Self {
            config,
            hash_algorithm,
            names,
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, registry: &Registry) -> Result<Self, KitError> {
        self.metrics = Some(KitMetrics::new(registry)?);
        Ok(self)
    }

    pub fn config(&self) -> &KitConfig {
        &self.config
    }

    pub fn names(&self) -> &NameResources {
        &self.names
    }

    pub fn metrics(&self) -> Option<&KitMetrics> {
        self.metrics.as_ref()
    }

    fn record(&self, module: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.record(module);
        }
    }

    fn record_decode<T>(&self, result: Result<T, DecodeError>) -> Result<T, DecodeError> {
        self.record("converters");
        if result.is_err() {
            if let Some(metrics) = &self.metrics {
                metrics.decode_failures.inc();
            }
        }
        result
    }

    pub fn gen_id(&self) -> String {
        self.record("generator");
        generator::gen_id(self.config.id_length)
    }

    pub fn gen_password(&self) -> String {
        self.record("generator");
        generator::gen_password(self.config.password_length)
    }

    pub fn gen_full_name(&self) -> String {
        self.record("generator");
        self.names
            .full_name(self.config.include_middle_name, &mut OsRng)
    }

    pub fn gen_full_names(&self) -> Vec<String> {
        self.record("generator");
        debug!(amount = self.config.full_names_amount, "generating full names");
        (0..self.config.full_names_amount)
            .map(|_| {
                self.names
                    .full_name(self.config.include_middle_name, &mut OsRng)
            })
            .collect()
    }

    /// Hex digest with the configured algorithm.
    pub fn hash(&self, text: &str) -> String {
        self.record("hash");
        self.hash_algorithm.hex_digest(text.as_bytes())
    }

    pub fn is_difficult(&self, text: &str) -> bool {
        self.record("analysis");
        analysis::is_difficult_at(text, self.config.difficulty_grade)
    }

    pub fn decode_base64(&self, text: &str) -> Result<String, DecodeError> {
        self.record_decode(converters::base64_decode(text))
    }

    pub fn decode_binary(&self, text: &str) -> Result<String, DecodeError> {
        self.record_decode(converters::binary_to_text(text))
    }

    pub fn decode_hex(&self, text: &str) -> Result<String, DecodeError> {
        self.record_decode(converters::hex_to_text(text))
    }
}

impl Default for TextKit {
    fn default() -> Self {
        Self {
            config: KitConfig::default(),
            hash_algorithm: HashAlgorithm::default(),
            names: Cow::Borrowed(NameResources::bundled()),
            metrics: None,
        }
    }
}
