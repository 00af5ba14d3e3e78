// Smoke test for fuzz-like scenarios with stable Rust
use std::time::{Duration, Instant};
use textkit::converters::{base64_decode, binary_to_text, hex_to_text, url_to_text};
use textkit::morse::{eng_to_imct, morse_to_eng};
use textkit::validators::{is_email, json_validator};

fn hostile_inputs() -> Vec<String> {
    vec![
        String::new(),
        "a".repeat(100_000),
        "%".repeat(10_000),
        "%zz%".repeat(1_000),
        "=".repeat(5_000),
        "1".repeat(64),
        "0 ".repeat(10_000),
        "-.-. ".repeat(10_000),
        format!("{}@{}.com", "a".repeat(50_000), "b".repeat(50_000)),
        "[".repeat(10_000),
        "\u{0}\u{FFFD}\u{10FFFF}".to_string(),
    ]
}

#[test]
fn decoders_never_panic() {
    for input in hostile_inputs() {
        let _ = base64_decode(&input);
        let _ = binary_to_text(&input);
        let _ = hex_to_text(&input);
        let _ = url_to_text(&input);
        let _ = morse_to_eng(&input);
        let _ = eng_to_imct(&input);
    }
}

#[test]
fn validators_stay_fast_on_long_input() {
    for input in hostile_inputs() {
        let start = Instant::now();
        let _ = is_email(&input);
        let _ = json_validator(&input);
        let duration = start.elapsed();
        assert!(
            duration < Duration::from_millis(500),
            "validation took {}ms for input length {}",
            duration.as_millis(),
            input.len()
        );
    }
}

#[test]
fn oversized_binary_group_is_rejected() {
    assert!(binary_to_text(&"1".repeat(64)).is_err());
}
