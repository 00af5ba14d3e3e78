pub mod analysis;
pub mod ciphers;
pub mod config;
pub mod converters;
pub mod errors;
pub mod generator;
pub mod hash;
pub mod logger;
pub mod metrics;
pub mod morse;
pub mod names;
pub mod readability;
pub mod sentiment;
pub mod toolkit;
pub mod validators;

pub use analysis::{
    detect_lang, text_difficulty, text_is_difficult, text_polarity, text_subjectivity, word_freq,
};
pub use ciphers::{
    a1z26_cipher, atbash_cipher, bacon_cipher, caesar_cipher, rail_fence_2_cipher,
    reverse_cipher, rot13, shift_cipher, substitution_cipher,
};
pub use converters::{
    base64_decode, base64_encode, binary_to_text, hex_to_text, text_to_binary, text_to_hex,
    text_to_url, to_camel_case, to_snake_case, url_to_text,
};
pub use errors::KitError;
pub use generator::{
    gen_first_name, gen_first_names, gen_full_name, gen_full_names, gen_id, gen_last_name,
    gen_last_names, gen_middle_name, gen_middle_names, gen_password, gen_phone, gen_uuid,
};
pub use hash::{generate_hash, HashAlgorithm};
pub use morse::{eng_to_imct, eng_to_morse, morse_to_eng};
pub use toolkit::TextKit;
pub use validators::{is_email, is_strong_pass, json_validator};
