#![no_main]

use libfuzzer_sys::fuzz_target;
use textkit::converters::{base64_decode, binary_to_text, hex_to_text, url_to_text};
use textkit::morse::{eng_to_imct, eng_to_morse, morse_to_eng};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    if input.len() > 100_000 {
        return;
    }

    // Decoders must reject, never panic
    let _ = base64_decode(&input);
    let _ = binary_to_text(&input);
    let _ = hex_to_text(&input);
    let _ = url_to_text(&input);

    let morse = eng_to_morse(&input);
    let decoded = morse_to_eng(&morse);
    assert!(decoded.len() <= input.to_uppercase().len());
    let _ = eng_to_imct(&input);
});
