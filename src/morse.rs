//! International Morse Code and its timing (IMCT) rendering.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

/// Supported characters and their codes. Space is encoded as `/`.
const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."),
    ('F', "..-."), ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"),
    ('K', "-.-"), ('L', ".-.."), ('M', "--"), ('N', "-."), ('O', "---"),
    ('P', ".--."), ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"), ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"), ('5', "....."),
    ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."), ('0', "-----"),
    ('.', ".-.-.-"), (',', "--..--"), ('?', "..--.."), ('\'', ".----."), ('!', "-.-.--"),
    ('/', "-..-."), ('(', "-.--."), (')', "-.--.-"), ('&', ".-..."), (':', "---..."),
    (';', "-.-.-."), ('=', "-...-"), ('+', ".-.-."), ('-', "-....-"), ('_', "..--.-"),
    ('"', ".-..-."), ('$', "...-..-"), ('@', ".--.-."),
    (' ', "/"),
];

static ENCODE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| MORSE_TABLE.iter().copied().collect());

static DECODE: Lazy<HashMap<&'static str, char>> =
    Lazy::new(|| MORSE_TABLE.iter().map(|&(c, code)| (code, c)).collect());

const WORD_SEPARATOR: &str = " / ";

/// Encodes text as Morse, one code per character, separated by spaces.
/// Characters without a code are dropped.
pub fn eng_to_morse(text: &str) -> String {
    let upper = text.to_uppercase();
    let mut codes = Vec::with_capacity(upper.len());
    let mut dropped = 0usize;
    for c in upper.chars() {
        match ENCODE.get(&c) {
            Some(code) => codes.push(*code),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, "morse encoder dropped unsupported characters");
    }
    codes.join(" ")
}

/// Decodes space-separated Morse tokens. Unknown tokens are dropped.
pub fn morse_to_eng(text: &str) -> String {
    let mut out = String::with_capacity(text.len() / 2);
    let mut dropped = 0usize;
    for token in text.split(' ') {
        match DECODE.get(token) {
            Some(c) => out.push(*c),
            None if token.is_empty() => {}
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, "morse decoder dropped unknown tokens");
    }
    out
}

/// Renders text as a Morse timing string.
///
/// A dot is `1` and a dash `111`. Symbols inside a letter are separated by
/// one `0`, letters by `000` and words by `0000000`.
pub fn eng_to_imct(text: &str) -> String {
    eng_to_morse(text)
        .split(WORD_SEPARATOR)
        .map(|word| {
            word.split(' ')
                .map(|letter| {
                    letter
                        .chars()
                        .filter_map(|symbol| match symbol {
                            '.' => Some("1"),
                            '-' => Some("111"),
                            _ => None,
                        })
                        .collect::<Vec<_>>()
                        .join("0")
                })
                .collect::<Vec<_>>()
                .join("000")
        })
        .collect::<Vec<_>>()
        .join("0000000")
}
