use thiserror::Error;

#[derive(Debug, Error)]
pub enum KitError {
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("cipher error: {0}")]
    Cipher(#[from] crate::ciphers::CipherError),
    #[error("decode error: {0}")]
    Decode(#[from] crate::converters::DecodeError),
    #[error("hash error: {0}")]
    Hash(#[from] crate::hash::HashError),
    #[error("name list error: {0}")]
    Names(#[from] crate::names::NameListError),
    #[error("analysis error: {0}")]
    Analysis(#[from] crate::analysis::AnalysisError),
    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}
