use proptest::prelude::*;
use textkit::ciphers::{atbash_cipher, caesar_cipher, reverse_cipher, rot13, shift_cipher};
use textkit::converters::{
    base64_decode, base64_encode, binary_to_text, hex_to_text, text_to_binary, text_to_hex,
    text_to_url, url_to_text,
};
use textkit::morse::{eng_to_morse, morse_to_eng};

// Property test configuration
const PROPTEST_CASES: u32 = 256;

// Characters with a Morse code, including space
const MORSE_CHARSET: &str = "[A-Za-z0-9.,?'!/()&:;=+\\-_\"$@ ]{0,40}";

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn self_inverse_ciphers(text in "[A-Za-z]{0,64}") {
        prop_assert_eq!(rot13(&rot13(&text)), text.clone());
        prop_assert_eq!(atbash_cipher(&atbash_cipher(&text)), text.clone());
        prop_assert_eq!(reverse_cipher(&reverse_cipher(&text)), text);
    }

    #[test]
    fn reverse_is_self_inverse_on_any_text(text in any::<String>()) {
        prop_assert_eq!(reverse_cipher(&reverse_cipher(&text)), text);
    }

    #[test]
    fn caesar_round_trip(text in any::<String>(), shift in any::<i64>()) {
        let encrypted = caesar_cipher(&text, shift, false);
        prop_assert_eq!(caesar_cipher(&encrypted, shift, true), text);
    }

    #[test]
    fn shift_wraps_modulo_26(text in "[ -~]{0,64}", shift in -1000i64..1000) {
        prop_assert_eq!(shift_cipher(&text, shift), shift_cipher(&text, shift + 26));
    }

    #[test]
    fn morse_round_trip(text in MORSE_CHARSET) {
        prop_assert_eq!(morse_to_eng(&eng_to_morse(&text)), text.to_uppercase());
    }

    #[test]
    fn converter_round_trips(text in any::<String>()) {
        prop_assert_eq!(base64_decode(&base64_encode(&text)).unwrap(), text.clone());
        prop_assert_eq!(binary_to_text(&text_to_binary(&text)).unwrap(), text.clone());
        prop_assert_eq!(hex_to_text(&text_to_hex(&text)).unwrap(), text.clone());
        prop_assert_eq!(url_to_text(&text_to_url(&text)), text);
    }
}
