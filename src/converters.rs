//! Text encoders/decoders and identifier case conversion.

use base64::{engine::general_purpose, Engine as _};
use once_cell::sync::Lazy;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Characters left untouched by [`text_to_url`]: alphanumerics plus `_.-~/`.
const URL_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

static CAPITALIZED_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());
static LOWER_TO_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid binary group {0:?}")]
    Binary(String),
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn log_failure<T>(kind: &str, result: Result<T, DecodeError>) -> Result<T, DecodeError> {
    if let Err(ref e) = result {
        debug!(kind, error = %e, "decode failed");
    }
    result
}

pub fn base64_encode(text: &str) -> String {
    general_purpose::STANDARD.encode(text.as_bytes())
}

/// Decodes standard, padded base64 into UTF-8 text. Whitespace, such as the
/// line breaks of wrapped MIME or PEM bodies, is ignored.
pub fn base64_decode(text: &str) -> Result<String, DecodeError> {
    let decode = || -> Result<String, DecodeError> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = general_purpose::STANDARD.decode(compact.as_bytes())?;
        Ok(String::from_utf8(bytes)?)
    };
    log_failure("base64", decode())
}

/// Renders every character as its code point in binary, at least 8 digits
/// wide, separated by spaces.
pub fn text_to_binary(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:08b}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn binary_to_text(binary: &str) -> Result<String, DecodeError> {
    let decode = || -> Result<String, DecodeError> {
        binary
            .split_whitespace()
            .map(|group| {
                u32::from_str_radix(group, 2)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| DecodeError::Binary(group.to_string()))
            })
            .collect()
    };
    log_failure("binary", decode())
}

/// Lowercase hex of the UTF-8 bytes, one pair per byte, space separated.
pub fn text_to_hex(text: &str) -> String {
    text.as_bytes()
        .iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes hex pairs back into text. Whitespace anywhere is ignored.
pub fn hex_to_text(hex_string: &str) -> Result<String, DecodeError> {
    let decode = || -> Result<String, DecodeError> {
        let compact: String = hex_string.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = hex::decode(compact)?;
        Ok(String::from_utf8(bytes)?)
    };
    log_failure("hex", decode())
}

pub fn text_to_url(text: &str) -> String {
    utf8_percent_encode(text, URL_ESCAPE).to_string()
}

/// Percent-decodes `url`. Invalid UTF-8 sequences become U+FFFD.
pub fn url_to_text(url: &str) -> String {
    percent_decode_str(url).decode_utf8_lossy().into_owned()
}

/// `CamelCase` / `HTTPResponse` to `camel_case` / `http_response`.
pub fn to_snake_case(text: &str) -> String {
    let split_words = CAPITALIZED_WORD.replace_all(text, "${1}_${2}");
    LOWER_TO_UPPER
        .replace_all(&split_words, "${1}_${2}")
        .to_lowercase()
}

/// `snake_case_text` to `snakeCaseText`.
pub fn to_camel_case(text: &str) -> String {
    let mut parts = text.split('_');
    let mut out = parts.next().unwrap_or_default().to_lowercase();
    for part in parts {
        out.push_str(&title_case(part));
    }
    out
}

// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut inside_word = false;
    for c in word.chars() {
        if inside_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        inside_word = c.is_alphabetic();
    }
    out
}
