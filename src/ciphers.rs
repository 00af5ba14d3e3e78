//! Classical substitution and transposition ciphers.
//!
//! None of these are secure. They operate on ASCII letters and leave
//! everything else alone unless a function says otherwise.

use thiserror::Error;
use tracing::debug;

const ALPHABET_LEN: i64 = 26;

/// Baconian codes indexed by letter. I/J and U/V share a code.
const BACON: [&str; 26] = [
    "aaaaa", "aaaab", "aaaba", "aaabb", "aabaa", "aabab", "aabba", "aabbb", "abaaa", "abaaa",
    "abaab", "ababa", "ababb", "abbaa", "abbab", "abbba", "abbbb", "baaaa", "baaab", "baaba",
    "baabb", "baabb", "babaa", "babab", "babba", "babbb",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("substitution key must be exactly 26 characters long, got {0}")]
    InvalidKeyLength(usize),
}

/// Applies `f` to the zero-based alphabet index of every ASCII letter and
/// maps the result back into the same case.
fn remap_letters<F>(text: &str, f: F) -> String
where
    F: Fn(u8) -> u8,
{
    text.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                (b'a' + f(c as u8 - b'a')) as char
            } else if c.is_ascii_uppercase() {
                (b'A' + f(c as u8 - b'A')) as char
            } else {
                c
            }
        })
        .collect()
}

/// Rotates each letter by `shift` positions, wrapping modulo 26.
pub fn shift_cipher(text: &str, shift: i64) -> String {
    let shift = shift.rem_euclid(ALPHABET_LEN) as u8;
    remap_letters(text, |idx| (idx + shift) % ALPHABET_LEN as u8)
}

pub fn caesar_cipher(text: &str, shift: i64, decrypt: bool) -> String {
    // rem_euclid first so negating i64::MIN cannot overflow
    let shift = shift.rem_euclid(ALPHABET_LEN);
    if decrypt {
        shift_cipher(text, -shift)
    } else {
        shift_cipher(text, shift)
    }
}

pub fn rot13(text: &str) -> String {
    shift_cipher(text, 13)
}

/// Mirrors each letter across the alphabet (a<->z, b<->y, ...).
pub fn atbash_cipher(text: &str) -> String {
    remap_letters(text, |idx| 25 - idx)
}

pub fn reverse_cipher(text: &str) -> String {
    text.chars().rev().collect()
}

/// Replaces letters with their alphabet position (A=1 .. Z=26).
///
/// Whitespace collapses to a single space per character and anything else is
/// copied through. Neighbouring numeric tokens are joined with `-` so the
/// output stays parseable.
pub fn a1z26_cipher(text: &str) -> String {
    let tokens: Vec<String> = text
        .to_uppercase()
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                (c as u8 - b'A' + 1).to_string()
            } else if c.is_whitespace() {
                " ".to_string()
            } else {
                c.to_string()
            }
        })
        .collect();

    let is_numeric = |s: &str| !s.is_empty() && s.chars().all(char::is_numeric);

    let mut out = String::with_capacity(tokens.len() * 3);
    for (i, token) in tokens.iter().enumerate() {
        out.push_str(token);
        if let Some(next) = tokens.get(i + 1) {
            if is_numeric(token) && is_numeric(next) {
                out.push('-');
            }
        }
    }
    out
}

/// Baconian cipher. Lossy: I/J and U/V collide. Letters outside A-Z have no
/// code and are dropped.
pub fn bacon_cipher(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 5);
    let mut dropped = 0usize;
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            out.push_str(BACON[(c.to_ascii_uppercase() as u8 - b'A') as usize]);
        } else if c.is_alphabetic() {
            dropped += 1;
        } else {
            out.push(c);
        }
    }
    if dropped > 0 {
        debug!(dropped, "bacon cipher dropped letters without a code");
    }
    out
}

/// Maps `a..z` onto `key` (lowercased) and `A..Z` onto `key` (uppercased).
pub fn substitution_cipher(text: &str, key: &str) -> Result<String, CipherError> {
    let key: Vec<char> = key.chars().collect();
    if key.len() != ALPHABET_LEN as usize {
        return Err(CipherError::InvalidKeyLength(key.len()));
    }

    let lower: Vec<char> = key
        .iter()
        .map(|k| k.to_lowercase().next().unwrap_or(*k))
        .collect();
    let upper: Vec<char> = key
        .iter()
        .map(|k| k.to_uppercase().next().unwrap_or(*k))
        .collect();

    Ok(text
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                lower[(c as u8 - b'a') as usize]
            } else if c.is_ascii_uppercase() {
                upper[(c as u8 - b'A') as usize]
            } else {
                c
            }
        })
        .collect())
}

/// Two-rail zigzag: even-indexed characters followed by odd-indexed ones.
/// There is deliberately no decoder.
pub fn rail_fence_2_cipher(text: &str) -> String {
    let (evens, odds): (Vec<(usize, char)>, Vec<(usize, char)>) =
        text.chars().enumerate().partition(|(i, _)| i % 2 == 0);
    evens.into_iter().chain(odds).map(|(_, c)| c).collect()
}
