//! Hex digests by algorithm name.

use sha2::Digest;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_ALGORITHM: &str = "sha256";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    #[error("Algorithm {0} is not supported.")]
    UnsupportedAlgorithm(String),
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b,
    Blake2s,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 12] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Blake2s,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha3_224 => "sha3_224",
            HashAlgorithm::Sha3_256 => "sha3_256",
            HashAlgorithm::Sha3_384 => "sha3_384",
            HashAlgorithm::Sha3_512 => "sha3_512",
            HashAlgorithm::Blake2b => "blake2b",
            HashAlgorithm::Blake2s => "blake2s",
        }
    }

    /// Lowercase hex digest of `data`.
    pub fn hex_digest(&self, data: &[u8]) -> String {
        match self {
            HashAlgorithm::Md5 => format!("{:x}", md5::compute(data)),
            HashAlgorithm::Sha1 => hex::encode(sha1::Sha1::digest(data)),
            HashAlgorithm::Sha224 => hex::encode(sha2::Sha224::digest(data)),
            HashAlgorithm::Sha256 => hex::encode(sha2::Sha256::digest(data)),
            HashAlgorithm::Sha384 => hex::encode(sha2::Sha384::digest(data)),
            HashAlgorithm::Sha512 => hex::encode(sha2::Sha512::digest(data)),
            HashAlgorithm::Sha3_224 => hex::encode(sha3::Sha3_224::digest(data)),
            HashAlgorithm::Sha3_256 => hex::encode(sha3::Sha3_256::digest(data)),
            HashAlgorithm::Sha3_384 => hex::encode(sha3::Sha3_384::digest(data)),
            HashAlgorithm::Sha3_512 => hex::encode(sha3::Sha3_512::digest(data)),
            HashAlgorithm::Blake2b => hex::encode(blake2::Blake2b512::digest(data)),
            HashAlgorithm::Blake2s => hex::encode(blake2::Blake2s256::digest(data)),
        }
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        HashAlgorithm::Sha256
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        HashAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == wanted)
            .ok_or_else(|| HashError::UnsupportedAlgorithm(s.to_string()))
    }
}

/// Hashes the UTF-8 bytes of `text` with the algorithm called `algorithm`.
pub fn generate_hash(text: &str, algorithm: &str) -> Result<String, HashError> {
    let algo = algorithm.parse::<HashAlgorithm>().map_err(|e| {
        warn!(algorithm, "unsupported hash algorithm requested");
        e
    })?;
    Ok(algo.hex_digest(text.as_bytes()))
}
